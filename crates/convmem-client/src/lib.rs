//! convmem-client - Client for the conversation embedding service.
//!
//! This crate provides the sole point of contact with the remote embedding
//! service. Both operations are plain request/response and never fail at
//! the type level: every transport or remote error is folded into the
//! response's `success`/`error` fields.
//!
//! # Example
//!
//! ```ignore
//! use convmem_client::EmbeddingApiClient;
//! use convmem_core::{ConversationData, ConversationMessage, SearchParams};
//!
//! let client = EmbeddingApiClient::from_env();
//!
//! let data = ConversationData::new("notes_plan_md", vec![ConversationMessage::user("hi")]);
//! let stored = client.store_conversation(&data).await;
//!
//! let params = SearchParams::new("plan").with_context(true);
//! let found = client.search_conversations(&params).await;
//! ```

mod client;

pub use client::EmbeddingApiClient;
pub use convmem_core::{SearchResponse, StoreResponse};
