//! Configuration for the analyzers and the processing pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cap applied to every field and entity list
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Cap applied to ranked signature findings
pub const DEFAULT_SIGNATURE_LIMIT: usize = 15;

/// Cap applied to stamp findings
pub const DEFAULT_STAMP_LIMIT: usize = 10;

/// Largest accepted upload (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Configuration for the Analyzer and DocumentProcessor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum entries kept per field or entity list
    pub list_limit: usize,

    /// Maximum signature findings kept after ranking
    pub signature_limit: usize,

    /// Maximum stamp findings kept
    pub stamp_limit: usize,

    /// Maximum upload size (bytes)
    pub max_file_size: usize,

    /// Maximum time for a single extraction call (seconds)
    pub extraction_timeout_secs: u64,

    /// Accepted upload MIME types; a `type/*` entry accepts the whole family
    pub accepted_mime_types: Vec<String>,
}

impl AnalyzerConfig {
    /// Get the extraction timeout as a Duration
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Whether an upload of this MIME type may be processed
    pub fn accepts_mime(&self, mime_type: &str) -> bool {
        let mime_type = mime_type.trim().to_ascii_lowercase();
        self.accepted_mime_types.iter().any(|accepted| {
            let accepted = accepted.to_ascii_lowercase();
            match accepted.strip_suffix("/*") {
                Some(family) => mime_type
                    .split_once('/')
                    .is_some_and(|(top, sub)| top == family && !sub.is_empty()),
                None => accepted == mime_type,
            }
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.list_limit == 0 {
            return Err("list_limit must be greater than 0".to_string());
        }
        if self.signature_limit == 0 {
            return Err("signature_limit must be greater than 0".to_string());
        }
        if self.stamp_limit == 0 {
            return Err("stamp_limit must be greater than 0".to_string());
        }
        if self.max_file_size == 0 {
            return Err("max_file_size must be greater than 0".to_string());
        }
        if self.extraction_timeout_secs == 0 {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        if self.accepted_mime_types.is_empty() {
            return Err("accepted_mime_types cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_LIST_LIMIT,
            signature_limit: DEFAULT_SIGNATURE_LIMIT,
            stamp_limit: DEFAULT_STAMP_LIMIT,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            extraction_timeout_secs: 120,
            accepted_mime_types: vec![
                "image/png".to_string(),
                "image/jpeg".to_string(),
                "image/webp".to_string(),
                "application/pdf".to_string(),
                "text/*".to_string(),
            ],
        }
    }
}

impl AnalyzerConfig {
    /// Strict preset: smaller uploads, shorter timeout
    pub fn strict() -> Self {
        Self {
            max_file_size: 5 * 1024 * 1024,
            extraction_timeout_secs: 60,
            ..Self::default()
        }
    }

    /// Lenient preset: larger uploads, longer timeout
    pub fn lenient() -> Self {
        Self {
            max_file_size: 25 * 1024 * 1024,
            extraction_timeout_secs: 300,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
