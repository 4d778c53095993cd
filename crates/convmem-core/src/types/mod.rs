//! Wire data model shared with the conversation embedding service.

mod conversation;
mod message;
mod search;

pub use conversation::{ConversationData, StoreResponse};
pub use message::{ConversationMessage, MessageRole};
pub use search::{ContextMessage, ConversationRef, MessageMatch, SearchParams, SearchResponse};
