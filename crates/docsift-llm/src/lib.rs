//! Docsift Text-Extraction Providers
//!
//! Implementations of the `TextExtractor` trait from `docsift-domain`.
//! Every provider turns file bytes plus a MIME type into plain text with a
//! single request, and reports failures through [`LlmError`].
//!
//! # Providers
//!
//! - `GeminiProvider`: Google Gemini multimodal `generateContent` API
//! - `PlainTextProvider`: Decodes `text/*` uploads locally, no network
//! - `MockProvider`: Deterministic canned responses for testing
//!
//! # Examples
//!
//! ```
//! use docsift_llm::MockProvider;
//! use docsift_domain::TextExtractor;
//!
//! # async fn example() {
//! let provider = MockProvider::new("Invoice #42");
//! let text = provider.extract_text(b"...", "image/png").await.unwrap();
//! assert_eq!(text, "Invoice #42");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod plain;
pub mod prompt;

use async_trait::async_trait;
use docsift_domain::TextExtractor;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use plain::PlainTextProvider;
pub use prompt::ExtractionPrompt;

/// Errors that can occur while extracting text from a file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// The API key was rejected
    #[error("Invalid API key. Please check your Google AI API key.")]
    InvalidCredentials,

    /// Usage limit hit
    #[error("API quota exceeded. Please check your usage limits.")]
    QuotaExceeded,

    /// The key is valid but lacks access
    #[error("Permission denied. Please check your API key permissions.")]
    PermissionDenied,

    /// No API key was configured
    #[error("No API key configured. Set GEMINI_API_KEY or run 'docsift config set-key'.")]
    MissingApiKey,

    /// The provider cannot handle this kind of input
    #[error("Unsupported input: {0}")]
    Unsupported(String),

    /// Any other failure reported by the external service
    #[error("Processing failed: {0}")]
    ExternalService(String),
}

impl LlmError {
    /// Categorize a raw failure message from the external service.
    ///
    /// Checks are case-sensitive and ordered: `API_KEY`, then `QUOTA`,
    /// then `PERMISSION`. Anything else is an `ExternalService` error
    /// carrying the message.
    pub fn classify(message: &str) -> Self {
        if message.contains("API_KEY") {
            LlmError::InvalidCredentials
        } else if message.contains("QUOTA") {
            LlmError::QuotaExceeded
        } else if message.contains("PERMISSION") {
            LlmError::PermissionDenied
        } else {
            LlmError::ExternalService(message.to_string())
        }
    }
}

/// Mock provider for deterministic testing
///
/// Returns pre-configured text without making any network calls. Responses
/// and failures can be keyed by MIME type.
///
/// # Examples
///
/// ```
/// use docsift_llm::{LlmError, MockProvider};
/// use docsift_domain::TextExtractor;
///
/// # async fn example() {
/// let mut provider = MockProvider::default();
/// provider.add_response("application/pdf", "Contract between parties");
/// provider.add_failure("image/png", "[400] API_KEY_INVALID");
///
/// let text = provider.extract_text(b"%PDF", "application/pdf").await.unwrap();
/// assert_eq!(text, "Contract between parties");
///
/// let err = provider.extract_text(b"png", "image/png").await.unwrap_err();
/// assert_eq!(err, LlmError::InvalidCredentials);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, Result<String, String>>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for every file
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Return `text` for files of the given MIME type
    pub fn add_response(&mut self, mime_type: impl Into<String>, text: impl Into<String>) {
        self.table().insert(mime_type.into(), Ok(text.into()));
    }

    /// Fail files of the given MIME type with a raw service message
    ///
    /// The message goes through [`LlmError::classify`] exactly like a real
    /// provider failure.
    pub fn add_failure(&mut self, mime_type: impl Into<String>, message: impl Into<String>) {
        self.table().insert(mime_type.into(), Err(message.into()));
    }

    /// Get the number of times extraction was requested
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    fn table(&self) -> MutexGuard<'_, HashMap<String, Result<String, String>>> {
        // A poisoned table still holds valid canned responses
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock text")
    }
}

#[async_trait]
impl TextExtractor for MockProvider {
    type Error = LlmError;

    async fn extract_text(&self, _bytes: &[u8], mime_type: &str) -> Result<String, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let canned = self.table().get(mime_type).cloned();
        match canned {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(LlmError::classify(&message)),
            None => Ok(self.default_response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_api_key() {
        assert_eq!(
            LlmError::classify("[400] API key not valid. reason: API_KEY_INVALID"),
            LlmError::InvalidCredentials
        );
    }

    #[test]
    fn test_classify_quota_and_permission() {
        assert_eq!(LlmError::classify("QUOTA exhausted"), LlmError::QuotaExceeded);
        assert_eq!(
            LlmError::classify("[403] PERMISSION_DENIED"),
            LlmError::PermissionDenied
        );
    }

    #[test]
    fn test_classify_priority_order() {
        // API_KEY wins over the later checks
        assert_eq!(
            LlmError::classify("PERMISSION QUOTA API_KEY"),
            LlmError::InvalidCredentials
        );
        assert_eq!(LlmError::classify("PERMISSION QUOTA"), LlmError::QuotaExceeded);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(
            LlmError::classify("you exceeded your current quota"),
            LlmError::ExternalService("you exceeded your current quota".to_string())
        );
    }

    #[test]
    fn test_external_service_message() {
        let err = LlmError::classify("connection reset");
        assert_eq!(err.to_string(), "Processing failed: connection reset");
    }

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test text");
        let result = provider.extract_text(b"bytes", "image/png").await;
        assert_eq!(result.unwrap(), "Test text");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("image/png", "from png");
        provider.add_response("application/pdf", "from pdf");

        assert_eq!(provider.extract_text(b"", "image/png").await.unwrap(), "from png");
        assert_eq!(
            provider.extract_text(b"", "application/pdf").await.unwrap(),
            "from pdf"
        );
        assert_eq!(
            provider.extract_text(b"", "image/webp").await.unwrap(),
            "Default mock text"
        );
    }

    #[tokio::test]
    async fn test_mock_provider_failure_is_classified() {
        let mut provider = MockProvider::default();
        provider.add_failure("image/jpeg", "QUOTA limit reached");

        let result = provider.extract_text(b"", "image/jpeg").await;
        assert_eq!(result.unwrap_err(), LlmError::QuotaExceeded);
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("text");
        assert_eq!(provider.call_count(), 0);

        provider.extract_text(b"", "text/plain").await.unwrap();
        provider.extract_text(b"", "text/plain").await.unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_count() {
        let provider1 = MockProvider::new("text");
        let provider2 = provider1.clone();

        provider1.extract_text(b"", "text/plain").await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
