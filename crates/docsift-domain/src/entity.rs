//! Entity bundle module

use serde::{Deserialize, Serialize};

/// Contact details, identifiers, and links found in a text.
///
/// Each list is de-duplicated by exact string equality and keeps
/// first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityBundle {
    /// `local@domain.tld` addresses
    pub emails: Vec<String>,

    /// Dashed, parenthesized, and `+`-prefixed phone numbers
    pub phone_numbers: Vec<String>,

    /// Street addresses and ZIP+4 codes
    pub addresses: Vec<String>,

    /// SSN, tax ID, license, and long numeric identifiers
    pub id_numbers: Vec<String>,

    /// `http(s)://` links
    pub urls: Vec<String>,
}

impl EntityBundle {
    /// Total entities across every category
    pub fn total(&self) -> usize {
        self.emails.len()
            + self.phone_numbers.len()
            + self.addresses.len()
            + self.id_numbers.len()
            + self.urls.len()
    }

    /// Whether no entity of any kind was found
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Categories paired with display names, in display order
    pub fn categories(&self) -> [(&'static str, &[String]); 5] {
        [
            ("Email Addresses", &self.emails),
            ("Phone Numbers", &self.phone_numbers),
            ("Addresses", &self.addresses),
            ("ID Numbers", &self.id_numbers),
            ("URLs", &self.urls),
        ]
    }
}
