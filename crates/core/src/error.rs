use std::io;

/// Errors that can occur while projecting classes into interfaces
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Symbol graph error: {0}")]
    SymbolError(String),

    #[error("Inconsistent member facts: {0}")]
    InconsistentFacts(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Generation pass was cancelled")]
    Cancelled,
}

/// Result type alias for interface generation
pub type Result<T> = std::result::Result<T, Error>;
