//! Keyword-driven document classification

use docsift_domain::DocumentType;

/// Pick the document type whose keywords appear first in priority order.
///
/// The text is lower-cased once and each type's keywords are probed as plain
/// substrings. Text with no keyword is `DocumentType::Unknown`.
pub fn classify_document(text: &str) -> DocumentType {
    let lower = text.to_lowercase();
    DocumentType::ALL
        .into_iter()
        .find(|doc_type| doc_type.keywords().iter().any(|k| lower.contains(*k)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_type() {
        let cases = [
            ("Please pay this BILL", DocumentType::InvoiceBill),
            ("Your receipt", DocumentType::Receipt),
            ("Service Agreement", DocumentType::ContractAgreement),
            ("Certificate of Completion", DocumentType::Certificate),
            ("Driver License", DocumentType::License),
            ("Quarterly Report", DocumentType::Report),
            ("Dear Sir, this letter", DocumentType::LetterCorrespondence),
            ("Privacy Policy", DocumentType::PolicyProcedure),
        ];
        for (text, expected) in cases {
            assert_eq!(classify_document(text), expected, "text: {text}");
        }
    }

    #[test]
    fn test_priority_order() {
        // "receipt" and "contract" both lose to "invoice"
        assert_eq!(
            classify_document("contract receipt invoice"),
            DocumentType::InvoiceBill
        );
        assert_eq!(
            classify_document("policy report agreement"),
            DocumentType::ContractAgreement
        );
    }

    #[test]
    fn test_substring_match() {
        // "billing" contains "bill"
        assert_eq!(classify_document("billing address"), DocumentType::InvoiceBill);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify_document("hello world"), DocumentType::Unknown);
        assert_eq!(classify_document(""), DocumentType::Unknown);
    }
}
