//! Contact details, identifiers, and links

use crate::collect::{collect_matches, take_first, text_len};
use docsift_domain::EntityBundle;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}(?-u:\b)").unwrap();

    static ref PHONE_PATTERNS: Vec<Regex> = vec![
        // 555-123-4567, 555.123.4567, 5551234567
        Regex::new(r"(?-u:\b)[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}(?-u:\b)").unwrap(),
        // (555) 123-4567
        Regex::new(r"\([0-9]{3}\)\s?[0-9]{3}[-.\s]?[0-9]{4}").unwrap(),
        // +1 555 123 4567
        Regex::new(r"\+[0-9]{1,3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap(),
    ];

    static ref ADDRESS_PATTERNS: Vec<Regex> = vec![
        Regex::new(
            r"(?i)[0-9]+\s+[A-Za-z\s]+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr|Court|Ct|Place|Pl)(?-u:\b)"
        ).unwrap(),
        // ZIP and ZIP+4
        Regex::new(r"(?-u:\b)[0-9]{5}(?:-[0-9]{4})?(?-u:\b)").unwrap(),
    ];

    static ref ID_PATTERNS: Vec<Regex> = vec![
        // SSN
        Regex::new(r"(?-u:\b)[0-9]{3}-[0-9]{2}-[0-9]{4}(?-u:\b)").unwrap(),
        // Tax ID
        Regex::new(r"(?-u:\b)[0-9]{2}-[0-9]{7}(?-u:\b)").unwrap(),
        // License
        Regex::new(r"(?-u:\b)[A-Z]{2}[0-9]{6,10}(?-u:\b)").unwrap(),
        Regex::new(r"(?-u:\b)[0-9]{9,12}(?-u:\b)").unwrap(),
    ];

    static ref URL: Regex = Regex::new(r"https?://\S+").unwrap();
}

/// Addresses of eight characters or fewer are dropped. This also drops
/// bare five-digit ZIP codes; ZIP+4 survives.
fn is_address_like(candidate: &str) -> bool {
    text_len(candidate) > 8
}

/// Pure digit runs shorter than nine are incidental numbers
fn is_id_like(candidate: &str) -> bool {
    !candidate.bytes().all(|b| b.is_ascii_digit()) || candidate.len() >= 9
}

/// Extract every entity category, each deduplicated and capped at `limit`
pub fn extract(text: &str, limit: usize) -> EntityBundle {
    let bundle = EntityBundle {
        emails: take_first(collect_matches([&*EMAIL], text, |_| true), limit),
        phone_numbers: take_first(collect_matches(PHONE_PATTERNS.iter(), text, |_| true), limit),
        addresses: take_first(collect_matches(ADDRESS_PATTERNS.iter(), text, is_address_like), limit),
        id_numbers: take_first(collect_matches(ID_PATTERNS.iter(), text, is_id_like), limit),
        urls: take_first(collect_matches([&*URL], text, |_| true), limit),
    };

    debug!(
        "Entities: {} emails, {} phones, {} addresses, {} IDs, {} URLs",
        bundle.emails.len(),
        bundle.phone_numbers.len(),
        bundle.addresses.len(),
        bundle.id_numbers.len(),
        bundle.urls.len()
    );

    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_line() {
        let entities = extract("Contact: jane@example.com or (555) 123-4567", 10);
        assert_eq!(entities.emails, vec!["jane@example.com"]);
        assert!(entities.phone_numbers.contains(&"(555) 123-4567".to_string()));
        assert!(entities.addresses.is_empty());
        assert!(entities.id_numbers.is_empty());
    }

    #[test]
    fn test_phone_formats() {
        let entities = extract("Call 555-123-4567 or +1 555 123 4567", 10);
        assert_eq!(entities.phone_numbers[0], "555-123-4567");
        assert!(entities
            .phone_numbers
            .contains(&"+1 555 123 4567".to_string()));
    }

    #[test]
    fn test_five_digit_zip_is_dropped() {
        // Pinned quirk: the length filter removes plain five-digit ZIPs
        assert!(extract("90210", 10).addresses.is_empty());
        assert!(extract("Springfield, IL 62704", 10).addresses.is_empty());
    }

    #[test]
    fn test_zip_plus_four_is_kept() {
        let entities = extract("Beverly Hills, CA 90210-1234", 10);
        assert_eq!(entities.addresses, vec!["90210-1234"]);
    }

    #[test]
    fn test_street_address() {
        let entities = extract("Ship to 123 Main Street, Springfield", 10);
        assert_eq!(entities.addresses, vec!["123 Main Street"]);
    }

    #[test]
    fn test_id_numbers() {
        let text = "SSN 123-45-6789, EIN 12-3456789, License CA12345678, Account 123456789012, code 12345678";
        let entities = extract(text, 10);
        assert_eq!(
            entities.id_numbers,
            vec!["123-45-6789", "12-3456789", "CA12345678", "123456789012"]
        );
    }

    #[test]
    fn test_urls_run_to_whitespace() {
        let entities = extract("see https://example.com/a?b=1 and http://x.io.", 10);
        assert_eq!(
            entities.urls,
            vec!["https://example.com/a?b=1", "http://x.io."]
        );
    }

    #[test]
    fn test_caps_and_dedup() {
        let text = (0..15)
            .map(|i| format!("user{}@example.com user0@example.com", i))
            .collect::<Vec<_>>()
            .join(" ");
        let entities = extract(&text, 10);
        assert_eq!(entities.emails.len(), 10);
        assert_eq!(entities.emails[0], "user0@example.com");
        assert_eq!(entities.emails[1], "user1@example.com");
    }

    #[test]
    fn test_empty_text() {
        assert!(extract("", 10).is_empty());
    }
}
