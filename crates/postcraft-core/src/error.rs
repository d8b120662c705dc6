//! Unified error type exposed by **`postcraft-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before handing them to the [`GenerationClient`](crate::GenerationClient),
//! which in turn folds them into a
//! [`GenerationResult::Failure`](crate::GenerationResult::Failure).

use std::time::Duration;

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PostcraftError>;

#[derive(Debug, Error)]
pub enum PostcraftError {
    /// Required configuration (credential, key file, …) is missing or
    /// unusable. Raised while building a backend, never during generation.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The selected backend does not recognise the requested `model`.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported {
        provider: &'static str,
        model: String,
    },

    /// Failure while serialising or deserialising JSON payloads.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend-specific error, displayed as-is.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The provider answered, but without any usable text.
    #[error("provider returned an empty response")]
    EmptyResponse,

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}
