//! Configuration for the embedding service client.

use serde::{Deserialize, Serialize};

/// Default base URL of the conversation embedding service.
pub const DEFAULT_BASE_URL: &str = "https://ai-embeddings.vercel.app";

/// Environment variable that overrides the service base URL.
pub const BASE_URL_ENV: &str = "CONVMEM_BASE_URL";

/// Client configuration for the embedding service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the embedding service, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create a configuration from the environment.
    ///
    /// Honors `CONVMEM_BASE_URL`; falls back to the production service URL.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}
