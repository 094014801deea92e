//! Insertion-ordered dedup helpers shared by the analyzers

use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use std::hash::Hash;

/// Length in UTF-16 code units, the unit every length threshold and the
/// summary character count are expressed in
pub(crate) fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Run each pattern over `text` in order and gather the whole-match strings
/// that pass `keep`, first occurrence first.
pub(crate) fn collect_matches<'a, I, F>(patterns: I, text: &str, keep: F) -> IndexSet<String>
where
    I: IntoIterator<Item = &'a Regex>,
    F: Fn(&str) -> bool,
{
    let mut found = IndexSet::new();
    for pattern in patterns {
        for m in pattern.find_iter(text) {
            if keep(m.as_str()) {
                found.insert(m.as_str().to_string());
            }
        }
    }
    found
}

/// First `limit` entries of an ordered set
pub(crate) fn take_first(set: IndexSet<String>, limit: usize) -> Vec<String> {
    set.into_iter().take(limit).collect()
}

/// Drop later items whose key was already seen, keeping discovery order
pub(crate) fn dedup_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut unique: IndexMap<K, T> = IndexMap::with_capacity(items.len());
    for item in items {
        unique.entry(key(&item)).or_insert(item);
    }
    unique.into_values().collect()
}
