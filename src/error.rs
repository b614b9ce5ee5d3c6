//! Error types for the Dobrovol discovery engine

use thiserror::Error;

/// Main application error type
///
/// Nothing in the engine is fatal to the hosting client: malformed records
/// are silently excluded and history persistence degrades, so the variants
/// here cover the collaborator boundary only.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Event source error: {0}")]
    EventSource(#[source] anyhow::Error),

    #[error("Storage error: {0}")]
    Storage(#[source] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
