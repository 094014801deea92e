//! Upload-to-report pipeline

use crate::analyzer::Analyzer;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::types::{AnalysisReport, DocumentReport, ProcessingMetadata, SourceDocument};
use chrono::Utc;
use docsift_domain::TextExtractor;
use docsift_llm::LlmError;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Validates an upload, awaits one text extraction, and runs every analyzer
pub struct DocumentProcessor<E>
where
    E: TextExtractor<Error = LlmError>,
{
    extractor: Arc<E>,
    analyzer: Analyzer,
}

impl<E> DocumentProcessor<E>
where
    E: TextExtractor<Error = LlmError>,
{
    /// Create a new DocumentProcessor
    pub fn new(extractor: E, config: AnalyzerConfig) -> Self {
        Self {
            extractor: Arc::new(extractor),
            analyzer: Analyzer::new(config),
        }
    }

    /// The analyzer used on extracted text
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Check MIME type and size against the configuration
    pub fn validate(&self, source: &SourceDocument) -> Result<(), AnalyzerError> {
        let config = self.analyzer.config();

        if !config.accepts_mime(&source.mime_type) {
            return Err(AnalyzerError::UnsupportedMimeType(source.mime_type.clone()));
        }
        if source.bytes.is_empty() {
            return Err(AnalyzerError::EmptyFile);
        }
        if source.size() > config.max_file_size {
            return Err(AnalyzerError::FileTooLarge {
                size: source.size(),
                max: config.max_file_size,
            });
        }
        Ok(())
    }

    /// Await exactly one extraction call under the configured timeout
    pub async fn extract_text(&self, source: &SourceDocument) -> Result<String, AnalyzerError> {
        let config = self.analyzer.config();

        let text = timeout(
            config.extraction_timeout(),
            self.extractor.extract_text(&source.bytes, &source.mime_type),
        )
        .await
        .map_err(|_| {
            warn!("Extraction of '{}' timed out", source.file_name);
            AnalyzerError::Timeout(config.extraction_timeout_secs)
        })?
        .map_err(|e| {
            warn!("Extraction of '{}' failed: {}", source.file_name, e);
            AnalyzerError::Extraction(e)
        })?;

        debug!("Extracted text length: {} chars", text.len());
        Ok(text)
    }

    /// Process an uploaded file into a report
    pub async fn process(&self, source: SourceDocument) -> Result<DocumentReport, AnalyzerError> {
        self.validate(&source)?;

        info!(
            "Processing '{}' ({}, {} bytes) with {}",
            source.file_name,
            source.mime_type,
            source.size(),
            self.extractor.model_name()
        );

        let extraction_start = Instant::now();
        let text = self.extract_text(&source).await?;
        let extraction_time_ms = extraction_start.elapsed().as_millis() as u64;

        let analysis_start = Instant::now();
        let report = if text.is_empty() {
            info!("No text extracted from '{}'", source.file_name);
            AnalysisReport::default()
        } else {
            self.analyzer.analyze_all(&text)
        };
        let analysis_time_ms = analysis_start.elapsed().as_millis() as u64;

        info!(
            "Analysis complete: {}, {} entities, {} signatures, {} stamps",
            report.analysis.document_type,
            report.entities.total(),
            report.signatures.len(),
            report.stamps.len()
        );

        let size_bytes = source.size();
        Ok(DocumentReport {
            file_name: source.file_name,
            mime_type: source.mime_type,
            size_bytes,
            text,
            report,
            metadata: ProcessingMetadata {
                model_name: self.extractor.model_name().to_string(),
                processed_at: Utc::now(),
                extraction_time_ms,
                analysis_time_ms,
            },
        })
    }
}
