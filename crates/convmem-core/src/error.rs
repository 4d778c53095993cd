//! Error types for convmem operations.

use thiserror::Error;

/// Result type alias for convmem operations.
pub type ConvmemResult<T> = Result<T, ConvmemError>;

/// Main error type for all convmem operations.
#[derive(Error, Debug)]
pub enum ConvmemError {
    /// The remote service could not be reached.
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The remote service responded with an error. The message is the one
    /// reported by the service, or a fixed fallback when it reported none.
    #[error("Remote service error: {0}")]
    Remote(String),

    /// The remote service responded with a body that could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ConvmemError {
    /// Create a network error with an underlying transport error.
    pub fn network(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a remote-reported error.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
