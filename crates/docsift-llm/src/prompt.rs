//! Prompt text sent alongside an uploaded file

use serde::{Deserialize, Serialize};

/// The instruction pair that brackets the file in an extraction request.
///
/// The system text goes before the file and the user text after it, in a
/// single content turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionPrompt {
    /// Role-setting instructions placed before the file
    pub system: String,

    /// Task instructions placed after the file
    pub user: String,
}

impl ExtractionPrompt {
    /// Create a prompt from explicit texts
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    /// Replace the system text
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    /// Replace the user text
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }
}

impl Default for ExtractionPrompt {
    fn default() -> Self {
        Self::new(SYSTEM_INSTRUCTIONS, USER_INSTRUCTIONS)
    }
}

const SYSTEM_INSTRUCTIONS: &str = r#"You are a specialist in comprehending receipts, invoices, and documents.
Input images or documents will be provided to you,
and your task is to extract and return all textual content from the input.
Convert the data into a well-structured, readable format.
If it's an invoice or receipt, organize the information clearly with proper formatting."#;

const USER_INSTRUCTIONS: &str = r#"Please extract all textual content from this document.
If it's an invoice or receipt, convert the data into a well-organized JSON format
with appropriate tags for items, amounts, dates, vendor information, etc.
If it's a regular document, extract all the text content in a readable format.
Maintain the structure and hierarchy of the information."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt_mentions_invoices() {
        let prompt = ExtractionPrompt::default();
        assert!(prompt.system.contains("receipts, invoices, and documents"));
        assert!(prompt.user.contains("extract all textual content"));
    }

    #[test]
    fn test_builders_replace_text() {
        let prompt = ExtractionPrompt::default()
            .with_system("Be terse.")
            .with_user("Return the text only.");
        assert_eq!(prompt.system, "Be terse.");
        assert_eq!(prompt.user, "Return the text only.");
    }
}
