//! Embedding service client implementation.

use convmem_core::error::{ConvmemError, ConvmemResult};
use convmem_core::types::{ConversationData, SearchParams, SearchResponse, StoreResponse};
use convmem_core::ApiConfig;

use reqwest::Client;

const STORE_PATH: &str = "/api/store-conversation-embedding";
const SEARCH_PATH: &str = "/api/search-conversation-embeddings";

/// Fallback message when the store endpoint reports an error without one.
const STORE_FALLBACK: &str = "Failed to store conversation";
/// Fallback message when the search endpoint reports an error without one.
const SEARCH_FALLBACK: &str = "Failed to search conversations";
/// Sentinel message for transport-level failures; raw network detail never
/// reaches the caller.
const CONNECT_ERROR: &str = "Failed to connect to conversation embedding service";

/// Client for the conversation embedding service.
pub struct EmbeddingApiClient {
    client: Client,
    base_url: String,
}

impl EmbeddingApiClient {
    /// Create a client against the default service URL.
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Create a client with the given configuration.
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
        }
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Self {
        Self::with_config(ApiConfig::from_env())
    }

    /// Store a conversation.
    ///
    /// Always resolves to a [`StoreResponse`]; a failed call yields
    /// `success: false` with a non-empty error message. Transport failures
    /// map to a fixed sentinel, remote-reported failures surface the
    /// service's own message when it supplied one.
    pub async fn store_conversation(&self, data: &ConversationData) -> StoreResponse {
        match self.try_store(data).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "store request failed");
                StoreResponse::failure(&data.conversation_id, failure_message(&err, STORE_FALLBACK))
            }
        }
    }

    /// Search stored conversations by free-text query.
    ///
    /// Same failure contract as [`store_conversation`](Self::store_conversation),
    /// with an empty match list in the failure shape.
    pub async fn search_conversations(&self, params: &SearchParams) -> SearchResponse {
        match self.try_search(params).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "search request failed");
                SearchResponse::failure(failure_message(&err, SEARCH_FALLBACK))
            }
        }
    }

    async fn try_store(&self, data: &ConversationData) -> ConvmemResult<StoreResponse> {
        tracing::debug!(conversation_id = %data.conversation_id, "storing conversation");
        let response = self
            .client
            .post(format!("{}{}", self.base_url, STORE_PATH))
            .json(data)
            .send()
            .await
            .map_err(|e| ConvmemError::network("store request could not be sent", e))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConvmemError::remote(remote_error_message(
                &body,
                STORE_FALLBACK,
            )));
        }

        response
            .json::<StoreResponse>()
            .await
            .map_err(|e| ConvmemError::parse(format!("invalid store response: {e}")))
    }

    async fn try_search(&self, params: &SearchParams) -> ConvmemResult<SearchResponse> {
        tracing::debug!(query = %params.query, "searching conversations");
        let response = self
            .client
            .post(format!("{}{}", self.base_url, SEARCH_PATH))
            .json(params)
            .send()
            .await
            .map_err(|e| ConvmemError::network("search request could not be sent", e))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ConvmemError::remote(remote_error_message(
                &body,
                SEARCH_FALLBACK,
            )));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| ConvmemError::parse(format!("invalid search response: {e}")))
    }
}

impl Default for EmbeddingApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the service-reported error message from an error body.
///
/// The service reports failures as `{"error": "..."}`; anything else
/// (empty body, HTML error page, unexpected shape) yields the fallback.
fn remote_error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| fallback.to_string())
}

/// Map a client-side error to the message surfaced in the failure response.
fn failure_message(err: &ConvmemError, fallback: &str) -> String {
    match err {
        ConvmemError::Remote(message) => message.clone(),
        ConvmemError::Parse(_) => fallback.to_string(),
        _ => CONNECT_ERROR.to_string(),
    }
}
