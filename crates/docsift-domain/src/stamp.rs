//! Stamp finding module

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of textual evidence produced a stamp finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StampKind {
    /// `stamp: ...`
    #[serde(rename = "Generic Stamp")]
    Generic,
    /// "official seal", "seal", "stamped"
    #[serde(rename = "Official Seal")]
    OfficialSeal,
    /// "notary", "notarized", "notarization"
    #[serde(rename = "Notary Stamp")]
    Notary,
    /// "certified", "certification"
    #[serde(rename = "Certification Stamp")]
    Certification,
    /// "approved", "approval"
    #[serde(rename = "Approval Stamp")]
    Approval,
    /// "received", "filing", "filed"
    #[serde(rename = "Filing Stamp")]
    Filing,
    /// "paid", "payment"
    #[serde(rename = "Payment Stamp")]
    Payment,
    /// Three consecutive all-caps words
    #[serde(rename = "Official Marking")]
    OfficialMarking,
    /// `MON D YYYY` in capitals
    #[serde(rename = "Date Stamp")]
    Date,
    /// `ref`/`file`/`doc` followed by an identifier
    #[serde(rename = "Reference Stamp")]
    Reference,
}

impl StampKind {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            StampKind::Generic => "Generic Stamp",
            StampKind::OfficialSeal => "Official Seal",
            StampKind::Notary => "Notary Stamp",
            StampKind::Certification => "Certification Stamp",
            StampKind::Approval => "Approval Stamp",
            StampKind::Filing => "Filing Stamp",
            StampKind::Payment => "Payment Stamp",
            StampKind::OfficialMarking => "Official Marking",
            StampKind::Date => "Date Stamp",
            StampKind::Reference => "Reference Stamp",
        }
    }
}

impl fmt::Display for StampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A piece of evidence that the document carries a stamp or seal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampFinding {
    /// Evidence kind
    #[serde(rename = "type")]
    pub kind: StampKind,

    /// The matched stamp text, trimmed
    pub content: String,

    /// Surrounding lines, or the raw match
    pub context: String,
}

impl StampFinding {
    /// Create a finding
    pub fn new(kind: StampKind, content: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            context: context.into(),
        }
    }
}
