//! Error types for Nimbus core operations

use thiserror::Error;

/// Main error type for Nimbus core operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Weather provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors related to upstream weather provider calls.
///
/// `Timeout` and `Upstream` are distinct variants: the timeout path carries
/// no status because no response exists, and the upstream-HTTP path carries
/// exactly the status it was built from.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout during upstream call")]
    Timeout,

    #[error("Upstream HTTP error {status}: {detail}")]
    Upstream { status: u16, detail: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse upstream response: {0}")]
    ResponseParse(String),
}

/// Errors related to presentation adapters
#[derive(Error, Debug)]
pub enum PresentationError {
    #[error("Server startup failed: {0}")]
    StartupFailed(String),

    #[error("Server shutdown failed: {0}")]
    ShutdownFailed(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
