//! MCP tool and prompt argument type definitions.
//!
//! These types are used with `schemars::JsonSchema` to generate the JSON
//! Schema that MCP clients use to understand tool and prompt parameters.
//! Field names follow the wire convention of the original tool contract
//! (camelCase, with `type` kept as-is).

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Input for the save-memory tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveMemoryInput {
    /// The content to store.
    pub content: String,

    /// Unique identifier path for the content.
    pub path: String,

    /// Content type (e.g., 'markdown').
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,

    /// Source of the content.
    #[serde(default)]
    pub source: Option<String>,

    /// Path of the parent content (if applicable).
    #[serde(default)]
    pub parent_path: Option<String>,
}

/// Input for the search-memory tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchMemoryInput {
    /// The search query.
    pub query: String,

    /// Maximum number of matches to return.
    #[serde(default)]
    pub max_matches: Option<usize>,
}

/// Arguments for the save-memory prompt.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SaveMemoryPromptArgs {
    /// Unique identifier path for the content.
    pub path: String,

    /// The content to store.
    pub content: String,
}

/// Arguments for the search-memory prompt.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchMemoryPromptArgs {
    /// The search query.
    pub query: String,
}
