//! Error types for the writer

use thiserror::Error;

/// Errors raised while turning records into files
#[derive(Error, Debug)]
pub enum WriterError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path template refers to an unknown variable or is unbalanced
    #[error("Template error in '{template}': {message}")]
    Template {
        /// Offending template
        template: String,
        /// What went wrong
        message: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Base URL pattern could not be compiled
    #[error("URL pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
