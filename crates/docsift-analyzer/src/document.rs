//! Field extraction: parties, dates, amounts, and organizations
//!
//! Each field has an ordered table of patterns. Matches from every pattern are
//! merged into one insertion-ordered set, so output order is pattern order,
//! then position within the text.

use crate::collect::{collect_matches, take_first, text_len};
use crate::config::DEFAULT_LIST_LIMIT;
use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;

/// Tokens that mark a capitalized run as something other than a person
const NON_PERSON_TOKENS: [&str; 5] = ["LLC", "Inc", "Corp", "THE", "AND"];

lazy_static! {
    /// Capitalized word runs that look like personal names
    static ref PARTY_PATTERNS: Vec<Regex> = vec![
        // Two or three capitalized words of three or more letters
        Regex::new(r"(?-u:\b)[A-Z][a-z]{2,}\s+[A-Z][a-z]{2,}(?:\s+[A-Z][a-z]{2,})?(?-u:\b)").unwrap(),
        // Two all-caps words
        Regex::new(r"(?-u:\b)[A-Z][A-Z]+\s+[A-Z][A-Z]+(?-u:\b)").unwrap(),
    ];

    /// Date grammars, most specific first
    static ref DATE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?-u:\b)[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}(?-u:\b)").unwrap(),
        Regex::new(r"(?-u:\b)[0-9]{4}-[0-9]{2}-[0-9]{2}(?-u:\b)").unwrap(),
        Regex::new(r"(?-u:\b)[0-9]{1,2}-[0-9]{1,2}-[0-9]{4}(?-u:\b)").unwrap(),
        Regex::new(
            r"(?-u:\b)(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+[0-9]{1,2},?\s+[0-9]{4}(?-u:\b)"
        ).unwrap(),
        Regex::new(
            r"(?-u:\b)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+[0-9]{1,2},?\s+[0-9]{4}(?-u:\b)"
        ).unwrap(),
    ];

    /// Currency grammars with optional thousands separators and cents
    static ref AMOUNT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\$[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{2})?").unwrap(),
        Regex::new(r"USD\s*[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{2})?").unwrap(),
        Regex::new(r"[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{2})?\s*USD").unwrap(),
        Regex::new(r"€[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{2})?").unwrap(),
        Regex::new(r"£[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{2})?").unwrap(),
    ];

    /// Names ending in a legal-entity suffix
    static ref ORGANIZATION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?-u:\b)[A-Z][a-zA-Z\s]+(?:LLC|Inc|Corp|Company|Co\.|Ltd|LLP|LP)\.?(?-u:\b)").unwrap(),
        Regex::new(r"(?-u:\b)[A-Z][A-Z\s]+(?:LLC|INC|CORP|COMPANY|CO\.|LTD|LLP|LP)\.?(?-u:\b)").unwrap(),
        Regex::new(r"(?-u:\b)[A-Z][a-zA-Z\s]+(?:Corporation|Incorporated|Limited)(?-u:\b)").unwrap(),
    ];
}

fn is_person_like(candidate: &str) -> bool {
    text_len(candidate) > 5 && !NON_PERSON_TOKENS.iter().any(|t| candidate.contains(t))
}

/// Every distinct party candidate, uncapped
pub(crate) fn party_set(text: &str) -> IndexSet<String> {
    collect_matches(PARTY_PATTERNS.iter(), text, is_person_like)
}

/// Every distinct date string, uncapped
pub(crate) fn date_set(text: &str) -> IndexSet<String> {
    collect_matches(DATE_PATTERNS.iter(), text, |_| true)
}

/// Every distinct amount string, uncapped
pub(crate) fn amount_set(text: &str) -> IndexSet<String> {
    collect_matches(AMOUNT_PATTERNS.iter(), text, |_| true)
}

/// Every distinct organization name, uncapped
pub(crate) fn organization_set(text: &str) -> IndexSet<String> {
    collect_matches(ORGANIZATION_PATTERNS.iter(), text, |_| true)
}

/// Candidate personal names.
///
/// Runs of two or three capitalized words, or two all-caps words. Runs of
/// five characters or fewer, and runs containing a corporate or filler token
/// ("LLC", "Inc", "Corp", "THE", "AND"), are skipped.
pub fn extract_parties(text: &str) -> Vec<String> {
    take_first(party_set(text), DEFAULT_LIST_LIMIT)
}

/// Date-like strings. Calendar validity is not checked.
pub fn extract_dates(text: &str) -> Vec<String> {
    take_first(date_set(text), DEFAULT_LIST_LIMIT)
}

/// Dollar, USD, euro, and pound amounts
pub fn extract_amounts(text: &str) -> Vec<String> {
    take_first(amount_set(text), DEFAULT_LIST_LIMIT)
}

/// Organization names ending in LLC, Inc, Corp, Ltd, Corporation, and similar
pub fn extract_organizations(text: &str) -> Vec<String> {
    take_first(organization_set(text), DEFAULT_LIST_LIMIT)
}
