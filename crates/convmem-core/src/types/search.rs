//! Search parameters and the search endpoint response.

use serde::{Deserialize, Serialize};

/// Parameters for the search endpoint.
///
/// `None` fields are omitted from the request body and left to the
/// service's defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: String,
    /// Restrict matches to a single conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    /// Maximum number of matches to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_count: Option<usize>,
    /// Minimum similarity for a match, 0.0 to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_threshold: Option<f64>,
    /// Ask the service to attach parent-conversation identity and
    /// neighboring messages to each match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_context: Option<bool>,
}

impl SearchParams {
    /// Create search parameters for the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            conversation_id: None,
            match_count: None,
            match_threshold: None,
            include_context: None,
        }
    }

    /// Limit the number of matches.
    pub fn with_match_count(mut self, count: usize) -> Self {
        self.match_count = Some(count);
        self
    }

    /// Request enriched matches.
    pub fn with_context(mut self, include: bool) -> Self {
        self.include_context = Some(include);
        self
    }
}

/// Identity of the conversation a match belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRef {
    pub conversation_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A neighboring message attached to an enriched match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextMessage {
    #[serde(default)]
    pub id: i64,
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A matched stored message with its similarity score.
///
/// Field names are the remote service's row shape (snake_case). When the
/// search was issued with `include_context`, the service enriches the match
/// with `conversation` and `context`; both stay empty otherwise, so one
/// struct covers both shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageMatch {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub conversation_id: i64,
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Similarity score, 0.0 to 1.0.
    pub similarity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<ContextMessage>,
}

impl MessageMatch {
    /// Whether the service enriched this match with conversation identity.
    pub fn is_enriched(&self) -> bool {
        self.conversation.is_some()
    }
}

/// Response from the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub matches: Vec<MessageMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Build the failure shape returned when a search call cannot complete.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            matches: Vec::new(),
            error: Some(error.into()),
        }
    }
}
