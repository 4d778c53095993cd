//! Storable conversation unit and the store endpoint response.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::message::ConversationMessage;

/// One storable unit: an ordered list of role-tagged messages under a
/// caller-supplied identifier.
///
/// The identifier must be stable across re-saves of the same logical path
/// so the service can overwrite rather than duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationData {
    pub conversation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub messages: Vec<ConversationMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl ConversationData {
    /// Create a conversation with the given identifier and messages.
    pub fn new(conversation_id: impl Into<String>, messages: Vec<ConversationMessage>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            title: None,
            summary: None,
            messages,
            metadata: None,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the metadata map.
    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Response from the store endpoint.
///
/// Optional fields are defaulted so a terse remote body still decodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    pub success: bool,
    #[serde(default)]
    pub conversation_id: String,
    /// Number of messages the service stored.
    #[serde(default)]
    pub messages: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StoreResponse {
    /// Build the failure shape returned when a store call cannot complete.
    pub fn failure(conversation_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            conversation_id: conversation_id.into(),
            messages: 0,
            error: Some(error.into()),
        }
    }
}
