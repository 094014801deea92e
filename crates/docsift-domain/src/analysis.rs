//! Document analysis module - classification, statistics, and field extractions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse document type decided by keyword presence.
///
/// Variants are listed in classification priority order; the first one whose
/// keywords appear in the text wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentType {
    /// "invoice" or "bill"
    #[serde(rename = "Invoice/Bill")]
    InvoiceBill,
    /// "receipt"
    #[serde(rename = "Receipt")]
    Receipt,
    /// "contract" or "agreement"
    #[serde(rename = "Contract/Agreement")]
    ContractAgreement,
    /// "certificate"
    #[serde(rename = "Certificate")]
    Certificate,
    /// "license"
    #[serde(rename = "License")]
    License,
    /// "report"
    #[serde(rename = "Report")]
    Report,
    /// "letter" or "correspondence"
    #[serde(rename = "Letter/Correspondence")]
    LetterCorrespondence,
    /// "policy" or "procedure"
    #[serde(rename = "Policy/Procedure")]
    PolicyProcedure,
    /// No keyword matched
    #[default]
    #[serde(rename = "Unknown Document")]
    Unknown,
}

impl DocumentType {
    /// All types in classification priority order
    pub const ALL: [DocumentType; 9] = [
        DocumentType::InvoiceBill,
        DocumentType::Receipt,
        DocumentType::ContractAgreement,
        DocumentType::Certificate,
        DocumentType::License,
        DocumentType::Report,
        DocumentType::LetterCorrespondence,
        DocumentType::PolicyProcedure,
        DocumentType::Unknown,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::InvoiceBill => "Invoice/Bill",
            DocumentType::Receipt => "Receipt",
            DocumentType::ContractAgreement => "Contract/Agreement",
            DocumentType::Certificate => "Certificate",
            DocumentType::License => "License",
            DocumentType::Report => "Report",
            DocumentType::LetterCorrespondence => "Letter/Correspondence",
            DocumentType::PolicyProcedure => "Policy/Procedure",
            DocumentType::Unknown => "Unknown Document",
        }
    }

    /// Purpose phrase used when narrating the document; empty for `Unknown`
    pub fn purpose(&self) -> &'static str {
        match self {
            DocumentType::InvoiceBill => "financial transaction",
            DocumentType::Receipt => "payment confirmation",
            DocumentType::ContractAgreement => "legal binding agreement",
            DocumentType::Certificate => "official certification or achievement",
            DocumentType::License => "official permission or authorization",
            DocumentType::Report => "informational analysis or findings",
            DocumentType::LetterCorrespondence => "formal communication",
            DocumentType::PolicyProcedure => "organizational guidelines",
            DocumentType::Unknown => "",
        }
    }

    /// Lower-case lookup keywords; empty for `Unknown`
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            DocumentType::InvoiceBill => &["invoice", "bill"],
            DocumentType::Receipt => &["receipt"],
            DocumentType::ContractAgreement => &["contract", "agreement"],
            DocumentType::Certificate => &["certificate"],
            DocumentType::License => &["license"],
            DocumentType::Report => &["report"],
            DocumentType::LetterCorrespondence => &["letter", "correspondence"],
            DocumentType::PolicyProcedure => &["policy", "procedure"],
            DocumentType::Unknown => &[],
        }
    }

    /// Whether this is the "no keyword matched" sentinel
    pub fn is_unknown(&self) -> bool {
        matches!(self, DocumentType::Unknown)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lexical complexity band derived from the share of long words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Complexity {
    /// Ratio of long words <= 0.08
    #[default]
    Simple,
    /// Ratio in (0.08, 0.15]
    Moderate,
    /// Ratio > 0.15
    Complex,
}

impl Complexity {
    /// Upper bound (inclusive) of the `Simple` band
    pub const SIMPLE_MAX: f64 = 0.08;

    /// Upper bound (inclusive) of the `Moderate` band
    pub const MODERATE_MAX: f64 = 0.15;

    /// Map a long-word ratio onto a band
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > Self::MODERATE_MAX {
            Complexity::Complex
        } else if ratio > Self::SIMPLE_MAX {
            Complexity::Moderate
        } else {
            Complexity::Simple
        }
    }

    /// Band name
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Moderate => "Moderate",
            Complexity::Complex => "Complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Surface statistics and topical signals computed over a text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Pieces produced by splitting on whitespace runs
    pub word_count: usize,

    /// Pieces produced by splitting on runs of `.`, `!`, `?`
    pub sentence_count: usize,

    /// `round(word_count / sentence_count)`, or 0 when there are no sentences
    pub avg_words_per_sentence: usize,

    /// Share of words with eight or more word characters
    pub complexity_ratio: f64,

    /// Band for `complexity_ratio`
    pub complexity: Complexity,

    /// Formal legal vocabulary present (hereby, whereas, pursuant, ...)
    pub has_legal_terms: bool,

    /// Financial vocabulary present (payment, invoice, balance, ...)
    pub has_financial_terms: bool,

    /// At least one date was extracted
    pub has_date_references: bool,

    /// At least one personal name was extracted
    pub has_personal_info: bool,
}

/// Result of analyzing a document's text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// Keyword-derived document type
    pub document_type: DocumentType,

    /// Short counts-based summary
    pub summary: String,

    /// Longer natural-language description
    pub narrative: String,

    /// Candidate personal names (at most 10 by default)
    pub parties: Vec<String>,

    /// Date-like strings (at most 10 by default)
    pub dates: Vec<String>,

    /// Currency amounts (at most 10 by default)
    pub amounts: Vec<String>,

    /// Organization names (at most 10 by default)
    pub organizations: Vec<String>,

    /// Statistics behind the narrative
    pub statistics: TextStatistics,
}

impl DocumentAnalysis {
    /// The "no content" analysis returned for empty text
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether nothing was found and no text was described
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.narrative.is_empty()
            && self.parties.is_empty()
            && self.dates.is_empty()
            && self.amounts.is_empty()
            && self.organizations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(Complexity::from_ratio(0.0), Complexity::Simple);
        assert_eq!(Complexity::from_ratio(0.08), Complexity::Simple);
        assert_eq!(Complexity::from_ratio(0.0801), Complexity::Moderate);
        assert_eq!(Complexity::from_ratio(0.15), Complexity::Moderate);
        assert_eq!(Complexity::from_ratio(0.1501), Complexity::Complex);
    }

    #[test]
    fn test_document_type_serializes_as_label() {
        for doc_type in DocumentType::ALL {
            let json = serde_json::to_string(&doc_type).unwrap();
            assert_eq!(json, format!("\"{}\"", doc_type.label()));
        }
    }

    #[test]
    fn test_unknown_has_no_purpose() {
        assert!(DocumentType::Unknown.is_unknown());
        assert_eq!(DocumentType::Unknown.purpose(), "");
        assert!(DocumentType::Unknown.keywords().is_empty());
        assert_eq!(DocumentType::default(), DocumentType::Unknown);
    }

    #[test]
    fn test_empty_analysis() {
        let analysis = DocumentAnalysis::empty();
        assert!(analysis.is_empty());
        assert_eq!(analysis.document_type.label(), "Unknown Document");
        assert_eq!(analysis.statistics.word_count, 0);
    }
}
