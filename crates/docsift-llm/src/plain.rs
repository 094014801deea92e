//! Local provider for uploads that are already text

use crate::LlmError;
use async_trait::async_trait;
use docsift_domain::TextExtractor;
use tracing::debug;

/// Decodes `text/*` uploads as UTF-8 without calling any service.
///
/// Invalid UTF-8 sequences are replaced rather than rejected. Any other MIME
/// type fails with [`LlmError::Unsupported`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextProvider;

impl PlainTextProvider {
    /// Create a new plain-text provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for PlainTextProvider {
    type Error = LlmError;

    async fn extract_text(&self, bytes: &[u8], mime_type: &str) -> Result<String, Self::Error> {
        if !mime_type.starts_with("text/") {
            return Err(LlmError::Unsupported(format!(
                "{} cannot be read locally; use a model provider",
                mime_type
            )));
        }

        debug!("Decoding {} bytes of {} locally", bytes.len(), mime_type);
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    fn model_name(&self) -> &str {
        "local-text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_decodes_text() {
        let provider = PlainTextProvider::new();
        let text = provider
            .extract_text("Receipt total: $5.00".as_bytes(), "text/plain")
            .await
            .unwrap();
        assert_eq!(text, "Receipt total: $5.00");
    }

    #[tokio::test]
    async fn test_replaces_invalid_utf8() {
        let provider = PlainTextProvider::new();
        let text = provider
            .extract_text(&[b'o', b'k', 0xFF], "text/plain")
            .await
            .unwrap();
        assert!(text.starts_with("ok"));
    }

    #[tokio::test]
    async fn test_rejects_images() {
        let provider = PlainTextProvider::new();
        let result = provider.extract_text(b"\x89PNG", "image/png").await;
        assert!(matches!(result, Err(LlmError::Unsupported(_))));
    }
}
