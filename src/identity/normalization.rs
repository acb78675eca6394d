//! Canonicalization rules for identity fields.

use serde::{Deserialize, Serialize};

/// How raw identity text is mapped to its canonical comparison key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// The raw text is the key
    Exact,
    /// Lowercased, so `M001` and `m001` share a key
    CaseFold,
    /// Leading and trailing whitespace removed, so `A001` and ` A001 ` share a key
    Trim,
}

impl Normalization {
    /// Map raw identity text to its canonical key.
    pub fn apply(self, raw: &str) -> String {
        match self {
            Normalization::Exact => raw.to_string(),
            Normalization::CaseFold => raw.to_lowercase(),
            Normalization::Trim => raw.trim().to_string(),
        }
    }

    /// Compare two raw values under this rule.
    pub fn same_key(self, left: &str, right: &str) -> bool {
        self.apply(left) == self.apply(right)
    }
}
