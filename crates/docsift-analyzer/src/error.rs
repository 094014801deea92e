//! Error types for document processing
//!
//! The analyzers themselves are total; only the pipeline around them fails.

use docsift_llm::LlmError;
use thiserror::Error;

/// Errors that can occur while processing an uploaded document
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The text-extraction service failed
    #[error("{0}")]
    Extraction(#[from] LlmError),

    /// The upload's MIME type is not accepted
    #[error("Unsupported file type: {0}")]
    UnsupportedMimeType(String),

    /// The upload exceeds the size limit
    #[error("File too large: {size} bytes (max: {max})")]
    FileTooLarge {
        /// Upload size in bytes
        size: usize,
        /// Configured limit in bytes
        max: usize,
    },

    /// The upload has no bytes
    #[error("File is empty")]
    EmptyFile,

    /// Extraction did not finish in time
    #[error("Extraction timed out after {0}s")]
    Timeout(u64),

    /// Reading the upload failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for AnalyzerError {
    fn from(e: std::io::Error) -> Self {
        AnalyzerError::Io(e.to_string())
    }
}

impl AnalyzerError {
    /// The provider error behind an extraction failure, if any
    pub fn extraction_error(&self) -> Option<&LlmError> {
        match self {
            AnalyzerError::Extraction(e) => Some(e),
            _ => None,
        }
    }
}
