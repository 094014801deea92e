//! Text statistics and the generated narrative and summary paragraphs

use docsift_domain::{Complexity, DocumentType, TextStatistics};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Write;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]+").unwrap();
    static ref LONG_WORD: Regex = Regex::new(r"(?-u:\b)(?-u:\w){8,}(?-u:\b)").unwrap();
    static ref LEGAL_TERMS: Regex = Regex::new(
        r"(?i)(?-u:\b)(?:hereby|whereas|aforementioned|pursuant|therefore|notwithstanding)(?-u:\b)"
    ).unwrap();
    static ref FINANCIAL_TERMS: Regex = Regex::new(
        r"(?i)(?-u:\b)(?:payment|invoice|amount|total|due|balance|credit|debit)(?-u:\b)"
    ).unwrap();
}

/// Distinct field counts feeding the narrative and summary.
///
/// These are the sizes before any list cap is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCounts {
    /// Distinct party candidates
    pub parties: usize,
    /// Distinct dates
    pub dates: usize,
    /// Distinct amounts
    pub amounts: usize,
    /// Distinct organizations
    pub organizations: usize,
}

/// Compute word, sentence, and complexity statistics plus topical signals.
///
/// Words are the pieces left by splitting on whitespace runs and sentences
/// the pieces left by splitting on runs of `.`, `!`, `?`; empty edge pieces
/// count. The average is 0 when there are no sentences.
pub fn compute_statistics(text: &str, counts: &FieldCounts) -> TextStatistics {
    let word_count = WHITESPACE.split(text).count();
    let sentence_count = SENTENCE_BREAK.split(text).count();

    let avg_words_per_sentence = if sentence_count == 0 {
        0
    } else {
        (word_count as f64 / sentence_count as f64).round() as usize
    };

    let long_words = LONG_WORD.find_iter(text).count();
    let complexity_ratio = if word_count == 0 {
        0.0
    } else {
        long_words as f64 / word_count as f64
    };

    TextStatistics {
        word_count,
        sentence_count,
        avg_words_per_sentence,
        complexity_ratio,
        complexity: Complexity::from_ratio(complexity_ratio),
        has_legal_terms: LEGAL_TERMS.is_match(text),
        has_financial_terms: FINANCIAL_TERMS.is_match(text),
        has_date_references: counts.dates > 0,
        has_personal_info: counts.parties > 0,
    }
}

fn plural(count: usize) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

/// Compose the descriptive paragraph for a classified document
pub fn narrate(document_type: DocumentType, stats: &TextStatistics, counts: &FieldCounts) -> String {
    let type_name = document_type.label().to_lowercase();
    let purpose = document_type.purpose();

    let mut out = format!(
        "This document appears to be a {} serving as a {}. \
         The text contains approximately {} words across {} sentences \
         with an average of {} words per sentence. \
         The document exhibits {} language complexity. ",
        type_name,
        purpose,
        stats.word_count,
        stats.sentence_count,
        stats.avg_words_per_sentence,
        stats.complexity.as_str().to_lowercase(),
    );

    if stats.has_legal_terms {
        out.push_str("It contains formal legal terminology indicating a formal or contractual nature. ");
    }
    if stats.has_financial_terms {
        out.push_str(
            "The document includes financial terminology suggesting monetary transactions or obligations. ",
        );
    }
    if stats.has_date_references {
        let _ = write!(
            out,
            "It references {} specific date{}, indicating time-sensitive information. ",
            counts.dates,
            plural(counts.dates)
        );
    }
    if stats.has_personal_info {
        let _ = write!(
            out,
            "The document mentions {} individual{}, suggesting personal or professional relationships. ",
            counts.parties,
            plural(counts.parties)
        );
    }

    let kind = if document_type.is_unknown() {
        "a formal document".to_string()
    } else {
        format!("a typical {}", type_name)
    };
    let setting = if purpose.contains("transaction") {
        "business or commercial"
    } else if purpose.contains("legal") {
        "legal or contractual"
    } else {
        "professional or official"
    };
    let _ = write!(
        out,
        "The overall structure and content suggest this is {} that would be used in {} contexts.",
        kind, setting
    );

    out
}

/// Compose the short counts summary; each count clause appears only when positive
pub fn summarize(document_type: DocumentType, char_count: usize, counts: &FieldCounts) -> String {
    let mut out = format!(
        "This {} contains {} characters of content. ",
        document_type.label().to_lowercase(),
        char_count
    );

    if counts.parties > 0 {
        let _ = write!(out, "Involves {} parties. ", counts.parties);
    }
    if counts.amounts > 0 {
        let _ = write!(out, "Contains {} monetary amounts. ", counts.amounts);
    }
    if counts.dates > 0 {
        let _ = write!(out, "References {} dates. ", counts.dates);
    }
    if counts.organizations > 0 {
        let _ = write!(out, "Mentions {} organizations. ", counts.organizations);
    }

    out
}
