//! The Analyzer and the free-function entry points

use crate::classifier::classify_document;
use crate::collect::{take_first, text_len};
use crate::config::AnalyzerConfig;
use crate::document::{amount_set, date_set, organization_set, party_set};
use crate::narrative::{compute_statistics, narrate, summarize, FieldCounts};
use crate::types::AnalysisReport;
use crate::{entities, signatures, stamps};
use docsift_domain::{DocumentAnalysis, EntityBundle, SignatureFinding, StampFinding};
use tracing::debug;

/// Runs the analyzers with configured caps.
///
/// Holds no state besides its configuration, so one instance can be shared
/// freely and every call with the same text returns the same result.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an Analyzer with the given configuration
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Classify the text and extract parties, dates, amounts, organizations,
    /// statistics, narrative, and summary
    pub fn analyze_document(&self, text: &str) -> DocumentAnalysis {
        if text.is_empty() {
            return DocumentAnalysis::empty();
        }

        let document_type = classify_document(text);
        let parties = party_set(text);
        let dates = date_set(text);
        let amounts = amount_set(text);
        let organizations = organization_set(text);

        let counts = FieldCounts {
            parties: parties.len(),
            dates: dates.len(),
            amounts: amounts.len(),
            organizations: organizations.len(),
        };
        let statistics = compute_statistics(text, &counts);
        let narrative = narrate(document_type, &statistics, &counts);
        let summary = summarize(document_type, text_len(text), &counts);

        debug!(
            "Classified as {}: {} parties, {} dates, {} amounts, {} organizations",
            document_type, counts.parties, counts.dates, counts.amounts, counts.organizations
        );

        let limit = self.config.list_limit;
        DocumentAnalysis {
            document_type,
            summary,
            narrative,
            parties: take_first(parties, limit),
            dates: take_first(dates, limit),
            amounts: take_first(amounts, limit),
            organizations: take_first(organizations, limit),
            statistics,
        }
    }

    /// Extract emails, phone numbers, addresses, ID numbers, and URLs
    pub fn extract_entities(&self, text: &str) -> EntityBundle {
        if text.is_empty() {
            return EntityBundle::default();
        }
        entities::extract(text, self.config.list_limit)
    }

    /// Detect signature evidence, highest confidence first
    pub fn detect_signatures(&self, text: &str) -> Vec<SignatureFinding> {
        if text.is_empty() {
            return Vec::new();
        }
        signatures::detect(text, self.config.signature_limit)
    }

    /// Detect stamp evidence in discovery order
    pub fn detect_stamps(&self, text: &str) -> Vec<StampFinding> {
        if text.is_empty() {
            return Vec::new();
        }
        stamps::detect(text, self.config.stamp_limit)
    }

    /// Run every analyzer over the same text
    pub fn analyze_all(&self, text: &str) -> AnalysisReport {
        AnalysisReport {
            analysis: self.analyze_document(text),
            entities: self.extract_entities(text),
            signatures: self.detect_signatures(text),
            stamps: self.detect_stamps(text),
        }
    }
}

/// [`Analyzer::analyze_document`] with default caps
pub fn analyze_document(text: &str) -> DocumentAnalysis {
    Analyzer::default().analyze_document(text)
}

/// [`Analyzer::extract_entities`] with default caps
pub fn extract_entities(text: &str) -> EntityBundle {
    Analyzer::default().extract_entities(text)
}

/// [`Analyzer::detect_signatures`] with default caps
pub fn detect_signatures(text: &str) -> Vec<SignatureFinding> {
    Analyzer::default().detect_signatures(text)
}

/// [`Analyzer::detect_stamps`] with default caps
pub fn detect_stamps(text: &str) -> Vec<StampFinding> {
    Analyzer::default().detect_stamps(text)
}

/// [`Analyzer::analyze_all`] with default caps
pub fn analyze_all(text: &str) -> AnalysisReport {
    Analyzer::default().analyze_all(text)
}
