//! Stamp and seal detection
//!
//! Keyword cues, all-caps markings, month-day-year date stamps, and stamped
//! reference numbers. Findings keep discovery order; there is no ranking.

use crate::collect::{dedup_by_key, text_len};
use crate::context::line_window;
use docsift_domain::{StampFinding, StampKind};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref PHRASE_PATTERNS: Vec<(Regex, StampKind)> = vec![
        (Regex::new(r"(?i)stamp[:\s]*([^\r\n\x{2028}\x{2029}]{5,50})").unwrap(), StampKind::Generic),
        (Regex::new(r"(?i)(official seal|seal|stamped)").unwrap(), StampKind::OfficialSeal),
        (Regex::new(r"(?i)(notary|notarized|notarization)").unwrap(), StampKind::Notary),
        (Regex::new(r"(?i)(certified|certification)").unwrap(), StampKind::Certification),
        (Regex::new(r"(?i)(approved|approval)").unwrap(), StampKind::Approval),
        (Regex::new(r"(?i)(received|filing|filed)").unwrap(), StampKind::Filing),
        (Regex::new(r"(?i)(paid|payment)").unwrap(), StampKind::Payment),
        (Regex::new(r"([A-Z]{2,}\s+[A-Z]{2,}\s+[A-Z]{2,})").unwrap(), StampKind::OfficialMarking),
    ];

    static ref DATE_STAMP: Regex = Regex::new(
        r"(?-u:\b)(?:JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)\s+[0-9]{1,2}\s+[0-9]{4}(?-u:\b)"
    ).unwrap();

    static ref REFERENCE_STAMP: Regex =
        Regex::new(r"(?i)(?:ref|reference|file|doc|document)[\s#:]*([A-Z0-9\-]{6,})").unwrap();
}

fn phrase_findings(text: &str, lines: &[&str], out: &mut Vec<StampFinding>) {
    for (pattern, kind) in PHRASE_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let content = caps.get(1).unwrap_or(whole).as_str().trim();
            if text_len(content) <= 2 {
                continue;
            }
            out.push(StampFinding::new(
                *kind,
                content,
                line_window(lines, whole.as_str()),
            ));
        }
    }
}

/// Detect stamp evidence, deduplicated and capped at `limit`
pub fn detect(text: &str, limit: usize) -> Vec<StampFinding> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut findings = Vec::new();

    phrase_findings(text, &lines, &mut findings);

    for m in DATE_STAMP.find_iter(text) {
        findings.push(StampFinding::new(StampKind::Date, m.as_str(), m.as_str()));
    }

    for caps in REFERENCE_STAMP.captures_iter(text) {
        if let (Some(whole), Some(reference)) = (caps.get(0), caps.get(1)) {
            findings.push(StampFinding::new(
                StampKind::Reference,
                reference.as_str(),
                whole.as_str(),
            ));
        }
    }

    let raw = findings.len();
    let mut findings = dedup_by_key(findings, |f| (f.content.clone(), f.kind));
    findings.truncate(limit);

    debug!("Stamps: {} raw, {} kept", raw, findings.len());
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filing_payment_date_and_reference() {
        let text = "RECEIVED\nFiled on JAN 15 2024\nRef: AB-123456\nPayment received";
        let findings = detect(text, 10);

        let summary: Vec<(StampKind, &str)> = findings
            .iter()
            .map(|f| (f.kind, f.content.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (StampKind::Filing, "RECEIVED"),
                (StampKind::Filing, "Filed"),
                (StampKind::Filing, "received"),
                (StampKind::Payment, "Payment"),
                (StampKind::Date, "JAN 15 2024"),
                (StampKind::Reference, "AB-123456"),
            ]
        );

        assert_eq!(findings[0].context, "RECEIVED Filed on JAN 15 2024");
        assert_eq!(findings[4].context, "JAN 15 2024");
        assert_eq!(findings[5].context, "Ref: AB-123456");
    }

    #[test]
    fn test_seal_and_official_marking() {
        let findings = detect("OFFICIAL STATE SEAL", 10);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].kind, StampKind::OfficialSeal);
        assert_eq!(findings[0].content, "SEAL");
        assert_eq!(findings[1].kind, StampKind::OfficialMarking);
        assert_eq!(findings[1].content, "OFFICIAL STATE SEAL");
    }

    #[test]
    fn test_generic_stamp_uses_capture() {
        let findings = detect("Stamp: Department of Revenue", 10);
        assert_eq!(findings[0].kind, StampKind::Generic);
        assert_eq!(findings[0].content, "Department of Revenue");
    }

    #[test]
    fn test_short_generic_capture_is_skipped() {
        assert!(detect("stamp:    a  ", 10).is_empty());
    }

    #[test]
    fn test_dedup_and_limit() {
        let text = "paid paid PAID approved certified notarized sealed filing \
                    Ref: AAA111 Ref: BBB222 Ref: CCC333 Ref: DDD444";
        let findings = detect(text, 10);
        assert_eq!(findings.len(), 10);

        let paid = findings
            .iter()
            .filter(|f| f.kind == StampKind::Payment && f.content == "paid")
            .count();
        assert_eq!(paid, 1);
    }

    #[test]
    fn test_generic_capture_stops_at_line_separator() {
        assert!(detect("stamp: ab\u{2028}cdefgh", 10).is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(detect("", 10).is_empty());
    }
}
