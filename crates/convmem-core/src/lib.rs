//! convmem-core - Core library for convmem.
//!
//! This crate provides the wire data model, error type, configuration, and
//! content normalization helpers shared by the convmem conversation memory
//! tools.
//!
//! # Example
//!
//! ```
//! use convmem_core::{parse, ConversationData};
//!
//! let conversation_id = parse::conversation_id_from_path("notes/2024/plan.md");
//! let messages = parse::messages_from_content("remember to water the plants");
//!
//! let data = ConversationData::new(conversation_id, messages)
//!     .with_title("notes/2024/plan.md");
//! assert_eq!(data.conversation_id, "notes_2024_plan_md");
//! ```

pub mod config;
pub mod error;
pub mod parse;
pub mod types;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{ConvmemError, ConvmemResult};
pub use types::{
    ContextMessage, ConversationData, ConversationMessage, ConversationRef, MessageMatch,
    MessageRole, SearchParams, SearchResponse, StoreResponse,
};
