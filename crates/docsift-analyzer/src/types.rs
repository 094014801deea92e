//! Input and output types for document processing

use crate::error::AnalyzerError;
use chrono::{DateTime, Utc};
use docsift_domain::{DocumentAnalysis, EntityBundle, SignatureFinding, StampFinding};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An uploaded file awaiting extraction
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// File name shown to the user
    pub file_name: String,

    /// MIME type used for validation and sent to the extractor
    pub mime_type: String,

    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    /// Create a source from in-memory bytes
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its MIME type from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Output of every analyzer for one text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Classification, fields, and narrative
    pub analysis: DocumentAnalysis,

    /// Contact details, identifiers, and links
    pub entities: EntityBundle,

    /// Ranked signature findings
    pub signatures: Vec<SignatureFinding>,

    /// Stamp findings
    pub stamps: Vec<StampFinding>,
}

impl AnalysisReport {
    /// Whether no analyzer found anything
    pub fn is_empty(&self) -> bool {
        self.analysis.is_empty()
            && self.entities.is_empty()
            && self.signatures.is_empty()
            && self.stamps.is_empty()
    }
}

/// Metadata about one processing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingMetadata {
    /// Extractor model or backend name
    pub model_name: String,

    /// When processing finished
    pub processed_at: DateTime<Utc>,

    /// Time spent waiting for extraction (milliseconds)
    pub extraction_time_ms: u64,

    /// Time spent in the analyzers (milliseconds)
    pub analysis_time_ms: u64,
}

/// Result of processing one uploaded file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Uploaded file name
    pub file_name: String,

    /// Uploaded MIME type
    pub mime_type: String,

    /// Uploaded size in bytes
    pub size_bytes: usize,

    /// Extracted text
    pub text: String,

    /// Analyzer output for `text`
    pub report: AnalysisReport,

    /// Processing metadata
    pub metadata: ProcessingMetadata,
}
