//! Google Gemini Provider Implementation
//!
//! Sends an uploaded file to Gemini's multimodal `generateContent` API and
//! returns the extracted text.
//!
//! # Features
//!
//! - File bytes sent inline as base64 next to the extraction prompt
//! - Configurable endpoint, model, sampling, and timeout
//! - Failure messages categorized through [`LlmError::classify`]
//! - Exactly one request per call; callers own any retry policy
//!
//! # Examples
//!
//! ```no_run
//! use docsift_llm::{GeminiConfig, GeminiProvider};
//!
//! let config = GeminiConfig::default().with_api_key("AIza...");
//! let provider = GeminiProvider::new(config).unwrap();
//! ```

use crate::prompt::ExtractionPrompt;
use crate::LlmError;
use async_trait::async_trait;
use base64::Engine;
use docsift_domain::TextExtractor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default timeout for a single request (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

/// Connection and sampling settings for Gemini
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API base URL
    pub endpoint: String,

    /// Model name (e.g., "gemini-1.5-flash", "gemini-1.5-pro")
    pub model: String,

    /// API key; falls back to `GEMINI_API_KEY` when loaded via [`GeminiConfig::from_env`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Sampling temperature
    pub temperature: f32,

    /// Nucleus sampling mass
    pub top_p: f32,

    /// Top-k sampling cutoff
    pub top_k: u32,

    /// Response length cap
    pub max_output_tokens: u32,

    /// Per-request timeout (seconds)
    pub request_timeout_secs: u64,
}

impl GeminiConfig {
    /// Default settings with the API key taken from `GEMINI_API_KEY`
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The configured key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            temperature: 0.2,
            top_p: 1.0,
            top_k: 32,
            max_output_tokens: 4096,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("top_k", &self.top_k)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Gemini API provider for multimodal text extraction
pub struct GeminiProvider {
    config: GeminiConfig,
    prompt: ExtractionPrompt,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

/// Response from the generateContent API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Errors
    ///
    /// Returns an `ExternalService` error if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| {
                LlmError::ExternalService(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            prompt: ExtractionPrompt::default(),
            client,
        })
    }

    /// Create a provider with default settings and the key from `GEMINI_API_KEY`
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(GeminiConfig::from_env())
    }

    /// Replace the extraction prompt
    pub fn with_prompt(mut self, prompt: ExtractionPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(&self, bytes: &[u8], mime_type: &str) -> GenerateContentRequest {
        let data = base64::engine::general_purpose::STANDARD.encode(bytes);

        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::Text {
                        text: self.prompt.system.clone(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data,
                        },
                    },
                    Part::Text {
                        text: self.prompt.user.clone(),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                top_k: self.config.top_k,
                max_output_tokens: self.config.max_output_tokens,
            },
            safety_settings: SAFETY_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: SAFETY_THRESHOLD,
                })
                .collect(),
        }
    }

    /// Extract text from a file using the Gemini API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No API key is configured (`MissingApiKey`)
    /// - The service rejects the key, quota, or permissions
    /// - Network communication fails or the response has no text candidate
    pub async fn generate(&self, bytes: &[u8], mime_type: &str) -> Result<String, LlmError> {
        let api_key = self.config.api_key().ok_or(LlmError::MissingApiKey)?;
        let url = self.url();
        let request_body = self.build_request(bytes, mime_type);

        debug!(
            "Sending {} bytes of {} to {}",
            bytes.len(),
            mime_type,
            self.config.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                warn!("Gemini request failed: {}", e);
                LlmError::classify(&format!("Error fetching from {}: {}", url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Gemini returned HTTP {}", status);
            return Err(LlmError::classify(&format!(
                "Error fetching from {}: [{}] {}",
                url, status, body
            )));
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| LlmError::ExternalService(format!("Failed to parse response: {}", e)))?;

        let text = response_text(parsed)?;
        debug!("Extracted text length: {}", text.len());
        Ok(text)
    }
}

/// Concatenate the text parts of the first candidate
fn response_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason);
        return Err(match reason {
            Some(reason) => LlmError::classify(&format!(
                "Text not available. Response was blocked due to {}",
                reason
            )),
            None => LlmError::ExternalService("Response contained no candidates".to_string()),
        });
    };

    Ok(candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default())
}

#[async_trait]
impl TextExtractor for GeminiProvider {
    type Error = LlmError;

    async fn extract_text(&self, bytes: &[u8], mime_type: &str) -> Result<String, Self::Error> {
        self.generate(bytes, mime_type).await
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
