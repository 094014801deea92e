//! Trait definitions for external interactions
//!
//! These traits define the boundary between analysis and infrastructure.
//! Implementations live in `docsift-llm`.

use async_trait::async_trait;

/// Turns an uploaded file into plain text.
///
/// Implemented by the infrastructure layer (docsift-llm). One call is one
/// request: implementations must not retry on their own.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Error type for extraction operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extract all textual content from `bytes` of the given MIME type
    async fn extract_text(&self, bytes: &[u8], mime_type: &str) -> Result<String, Self::Error>;

    /// Name of the model or backend doing the extraction
    fn model_name(&self) -> &str;
}
