//! Signature detection
//!
//! Three passes run in a fixed order over the text:
//!
//! 1. Phrase cues ("Signed:", "Witness:", ...) with a line-window context
//! 2. Layout cues (signature lines, X-marks, `[signature]` tags) with the
//!    raw match as context
//! 3. Bare initials, always `Low` confidence
//!
//! Findings are then deduplicated by `(content, kind)`, stable-sorted by
//! confidence from high to low, and truncated.

use crate::collect::{dedup_by_key, text_len};
use crate::context::line_window;
use docsift_domain::{Confidence, SignatureFinding, SignatureKind};
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Reverse;
use tracing::debug;

// Phrase captures stop at any line terminator, including U+2028 and U+2029.
lazy_static! {
    static ref PHRASE_PATTERNS: Vec<(Regex, SignatureKind, Confidence)> = vec![
        (
            Regex::new(r"(?i)signature[:\s]*([^\r\n\x{2028}\x{2029}]{5,50})").unwrap(),
            SignatureKind::DirectReference,
            Confidence::High,
        ),
        (
            Regex::new(r"(?i)signed[:\s]*([^\r\n\x{2028}\x{2029}]{5,50})").unwrap(),
            SignatureKind::SignedReference,
            Confidence::High,
        ),
        (
            Regex::new(r"(?i)electronically signed by[:\s]*([^\r\n\x{2028}\x{2029}]{5,50})").unwrap(),
            SignatureKind::Electronic,
            Confidence::High,
        ),
        (
            Regex::new(r"(?i)digitally signed by[:\s]*([^\r\n\x{2028}\x{2029}]{5,50})").unwrap(),
            SignatureKind::Digital,
            Confidence::High,
        ),
        (
            Regex::new(r"(?i)authorized by[:\s]*([^\r\n\x{2028}\x{2029}]{5,50})").unwrap(),
            SignatureKind::Authorization,
            Confidence::Medium,
        ),
        (
            Regex::new(r"(?i)([A-Z][a-z]+ [A-Z][a-z]+)\s*\n[^\r\n\x{2028}\x{2029}]*signature").unwrap(),
            SignatureKind::NameAboveSignatureLine,
            Confidence::Medium,
        ),
        (
            Regex::new(r"(?i)witness[:\s]*([^\r\n\x{2028}\x{2029}]{5,50})").unwrap(),
            SignatureKind::Witness,
            Confidence::Medium,
        ),
        (
            Regex::new(r"(?i)notarized by[:\s]*([^\r\n\x{2028}\x{2029}]{5,50})").unwrap(),
            SignatureKind::Notary,
            Confidence::High,
        ),
    ];

    static ref BLOCK_PATTERNS: Vec<(Regex, SignatureKind, Confidence)> = vec![
        (
            Regex::new(r"___+\s*\n\s*([A-Z][a-z]+ [A-Z][a-z]+)").unwrap(),
            SignatureKind::BlockNameBelowLine,
            Confidence::High,
        ),
        (
            Regex::new(r"([A-Z][a-z]+ [A-Z][a-z]+)\s*\n\s*___+").unwrap(),
            SignatureKind::BlockNameAboveLine,
            Confidence::High,
        ),
        (
            Regex::new(r"X\s*([A-Z][a-z]+ [A-Z][a-z]+)").unwrap(),
            SignatureKind::XMark,
            Confidence::Medium,
        ),
        (
            Regex::new(r"(?i)\[signature\]\s*([A-Z][a-z]+ [A-Z][a-z]+)").unwrap(),
            SignatureKind::Bracketed,
            Confidence::Medium,
        ),
    ];

    static ref INITIALS: Regex = Regex::new(r"(?-u:\b)([A-Z]\.[A-Z]\.?)(?-u:\b)").unwrap();
}

fn phrase_findings(text: &str, lines: &[&str], out: &mut Vec<SignatureFinding>) {
    for (pattern, kind, confidence) in PHRASE_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let Some(captured) = caps.get(1) else {
                continue;
            };
            let content = captured.as_str().trim();
            if text_len(content) <= 2 {
                continue;
            }
            let whole = caps.get(0).map_or("", |m| m.as_str());
            out.push(SignatureFinding::new(
                *kind,
                content,
                line_window(lines, whole),
                *confidence,
            ));
        }
    }
}

fn block_findings(text: &str, out: &mut Vec<SignatureFinding>) {
    for (pattern, kind, confidence) in BLOCK_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push(SignatureFinding::new(
                *kind,
                name.as_str().trim(),
                whole.as_str().trim(),
                *confidence,
            ));
        }
    }
}

fn initials_findings(text: &str, out: &mut Vec<SignatureFinding>) {
    for m in INITIALS.find_iter(text) {
        out.push(SignatureFinding::new(
            SignatureKind::Initials,
            m.as_str(),
            m.as_str(),
            Confidence::Low,
        ));
    }
}

/// Detect signature evidence, ranked and capped at `limit`
pub fn detect(text: &str, limit: usize) -> Vec<SignatureFinding> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut findings = Vec::new();

    phrase_findings(text, &lines, &mut findings);
    block_findings(text, &mut findings);
    initials_findings(text, &mut findings);

    let raw = findings.len();
    let mut findings = dedup_by_key(findings, |f| (f.content.clone(), f.kind));
    // sort_by_key is stable: equal tiers keep discovery order
    findings.sort_by_key(|f| Reverse(f.confidence.rank()));
    findings.truncate(limit);

    debug!("Signatures: {} raw, {} kept", raw, findings.len());
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_reference() {
        let findings = detect(
            "Invoice #123 Date: 01/15/2024 Amount: $1,234.56 Signed: John Smith",
            15,
        );
        let signed = findings
            .iter()
            .find(|f| f.kind == SignatureKind::SignedReference)
            .unwrap();
        assert_eq!(signed.content, "John Smith");
        assert_eq!(signed.confidence, Confidence::High);
        assert_eq!(
            signed.context,
            "Invoice #123 Date: 01/15/2024 Amount: $1,234.56 Signed: John Smith"
        );
    }

    #[test]
    fn test_short_capture_is_skipped() {
        // the capture needs five characters and more than two after trimming
        assert!(detect("Signed:  ab  ", 15).is_empty());
    }

    #[test]
    fn test_capture_stops_at_unicode_line_separators() {
        assert!(detect("Signed: Al\u{2028}Lee Jones", 15).is_empty());
        assert!(detect("Witness: Al\u{2029}Lee Jones", 15).is_empty());

        let findings = detect("Signed: Kim Lee\u{2028}Witness: none", 15);
        assert_eq!(findings[0].kind, SignatureKind::SignedReference);
        assert_eq!(findings[0].content, "Kim Lee");
    }

    #[test]
    fn test_phrase_context_uses_line_window() {
        let text = "Agreement terms\nWitness: Robert Brown\nDated today\nPage 2";
        let findings = detect(text, 15);
        let witness = findings
            .iter()
            .find(|f| f.kind == SignatureKind::Witness)
            .unwrap();
        assert_eq!(witness.content, "Robert Brown");
        assert_eq!(witness.confidence, Confidence::Medium);
        assert_eq!(
            witness.context,
            "Agreement terms Witness: Robert Brown Dated today"
        );
    }

    #[test]
    fn test_signature_blocks() {
        let text = "_______________\nJane Doe\n\nMark Lee\n__________";
        let findings = detect(text, 15);

        let below = findings
            .iter()
            .find(|f| f.kind == SignatureKind::BlockNameBelowLine)
            .unwrap();
        assert_eq!(below.content, "Jane Doe");
        assert_eq!(below.context, "_______________\nJane Doe");

        let above = findings
            .iter()
            .find(|f| f.kind == SignatureKind::BlockNameAboveLine)
            .unwrap();
        assert_eq!(above.content, "Mark Lee");
    }

    #[test]
    fn test_bracketed_and_x_mark() {
        let findings = detect("[SIGNATURE] Anna Bell and X Carl Dunn", 15);
        assert!(findings
            .iter()
            .any(|f| f.kind == SignatureKind::Bracketed && f.content == "Anna Bell"));
        assert!(findings
            .iter()
            .any(|f| f.kind == SignatureKind::XMark && f.content == "Carl Dunn"));
    }

    #[test]
    fn test_initials_are_low_confidence() {
        let findings = detect("Approved J.D. today", 15);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, SignatureKind::Initials);
        assert_eq!(findings[0].content, "J.D");
        assert_eq!(findings[0].confidence, Confidence::Low);
    }

    #[test]
    fn test_ranked_high_to_low_with_stable_ties() {
        let text = "A.B. first\nWitness: Robert Brown\nSigned: John Smith\nSignature: Mary Major";
        let findings = detect(text, 15);

        let ranks: Vec<u8> = findings.iter().map(|f| f.confidence.rank()).collect();
        assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(findings.last().unwrap().kind, SignatureKind::Initials);

        // High findings keep pattern order: direct references before signed ones
        let first_direct = findings
            .iter()
            .position(|f| f.kind == SignatureKind::DirectReference)
            .unwrap();
        let first_signed = findings
            .iter()
            .position(|f| f.kind == SignatureKind::SignedReference)
            .unwrap();
        assert!(first_direct < first_signed);
    }

    #[test]
    fn test_dedup_by_content_and_kind() {
        let text = "Signed: John Smith\nSigned: John Smith";
        let findings = detect(text, 15);
        let signed: Vec<_> = findings
            .iter()
            .filter(|f| f.kind == SignatureKind::SignedReference)
            .collect();
        assert_eq!(signed.len(), 1);
    }

    #[test]
    fn test_truncated_to_limit() {
        let text = (0..20)
            .map(|i| format!("Signed: Person Number{:02}", i))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(detect(&text, 15).len(), 15);
    }

    #[test]
    fn test_empty_text() {
        assert!(detect("", 15).is_empty());
    }
}
