//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction error (unreadable or malformed export)
    #[error("{0}")]
    Extract(#[from] wpmark_extractor::ExtractorError),

    /// Writer error
    #[error("{0}")]
    Writer(#[from] wpmark_writer::WriterError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Logging could not be set up
    #[error("Logging error: {0}")]
    Logging(String),
}
