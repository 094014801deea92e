//! Signature finding module

use crate::confidence::Confidence;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of textual evidence produced a signature finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureKind {
    /// `signature: ...`
    #[serde(rename = "Direct Signature Reference")]
    DirectReference,
    /// `signed: ...`
    #[serde(rename = "Signed Reference")]
    SignedReference,
    /// `electronically signed by: ...`
    #[serde(rename = "Electronic Signature")]
    Electronic,
    /// `digitally signed by: ...`
    #[serde(rename = "Digital Signature")]
    Digital,
    /// `authorized by: ...`
    #[serde(rename = "Authorization Signature")]
    Authorization,
    /// A two-word name on the line before a line mentioning "signature"
    #[serde(rename = "Name Above Signature Line")]
    NameAboveSignatureLine,
    /// `witness: ...`
    #[serde(rename = "Witness Signature")]
    Witness,
    /// `notarized by: ...`
    #[serde(rename = "Notary Signature")]
    Notary,
    /// Underscore rule followed by a name on the next line
    #[serde(rename = "Signature Block (Name Below Line)")]
    BlockNameBelowLine,
    /// Name followed by an underscore rule on the next line
    #[serde(rename = "Signature Block (Name Above Line)")]
    BlockNameAboveLine,
    /// `X` mark followed by a name
    #[serde(rename = "X-Mark Signature")]
    XMark,
    /// `[signature]` placeholder followed by a name
    #[serde(rename = "Bracketed Signature")]
    Bracketed,
    /// Two-letter initials such as `J.S.`
    #[serde(rename = "Initials")]
    Initials,
}

impl SignatureKind {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            SignatureKind::DirectReference => "Direct Signature Reference",
            SignatureKind::SignedReference => "Signed Reference",
            SignatureKind::Electronic => "Electronic Signature",
            SignatureKind::Digital => "Digital Signature",
            SignatureKind::Authorization => "Authorization Signature",
            SignatureKind::NameAboveSignatureLine => "Name Above Signature Line",
            SignatureKind::Witness => "Witness Signature",
            SignatureKind::Notary => "Notary Signature",
            SignatureKind::BlockNameBelowLine => "Signature Block (Name Below Line)",
            SignatureKind::BlockNameAboveLine => "Signature Block (Name Above Line)",
            SignatureKind::XMark => "X-Mark Signature",
            SignatureKind::Bracketed => "Bracketed Signature",
            SignatureKind::Initials => "Initials",
        }
    }
}

impl fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A piece of evidence that the document was signed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureFinding {
    /// Evidence kind
    #[serde(rename = "type")]
    pub kind: SignatureKind,

    /// The captured signer text, trimmed
    pub content: String,

    /// Surrounding lines, or the raw match when no single line holds it
    pub context: String,

    /// Ranking tier
    pub confidence: Confidence,
}

impl SignatureFinding {
    /// Create a finding
    pub fn new(
        kind: SignatureKind,
        content: impl Into<String>,
        context: impl Into<String>,
        confidence: Confidence,
    ) -> Self {
        Self {
            kind,
            content: content.into(),
            context: context.into(),
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_serializes_kind_as_type() {
        let finding = SignatureFinding::new(
            SignatureKind::SignedReference,
            "John Smith",
            "Signed: John Smith",
            Confidence::High,
        );
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["type"], "Signed Reference");
        assert_eq!(json["confidence"], "High");
        assert_eq!(json["content"], "John Smith");
    }
}
