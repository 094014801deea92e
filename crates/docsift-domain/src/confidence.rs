//! Confidence tier module

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal confidence attached to a signature finding.
///
/// This is a ranking, not a probability. Findings are ordered by
/// [`Confidence::rank`] with `High` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    /// Strong textual evidence (explicit "signed:" style phrases, signature blocks)
    High,
    /// Suggestive evidence (witness lines, authorizations, X-marks)
    Medium,
    /// Weak evidence (bare initials)
    Low,
}

impl Confidence {
    /// Numeric rank used for ordering: High=3, Medium=2, Low=1
    pub fn rank(&self) -> u8 {
        match self {
            Confidence::High => 3,
            Confidence::Medium => 2,
            Confidence::Low => 1,
        }
    }

    /// Get the tier name as displayed to users
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
