//! Error types for the Extractor

use thiserror::Error;

/// Errors that abort an extraction run
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Source document could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tokenizer rejected the document
    #[error("XML error at byte {position}: {message}")]
    Xml {
        /// Byte offset where the failing event started
        position: u64,
        /// Tokenizer message
        message: String,
    },

    /// Tag name or text is not valid UTF-8 or cannot be unescaped
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A sink refused a record
    #[error("Sink error: {0}")]
    Sink(String),
}
