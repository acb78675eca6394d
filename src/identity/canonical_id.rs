//! Identity text paired with its canonical key.

use super::Normalization;
use crate::error::{ValueError, ValueResult};
use crate::validation::{MinLength, Validator, Verdict};
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A validated identity field.
///
/// The raw text is kept for display; the canonical key is computed once at
/// construction and is the only thing equality and hashing look at. A value
/// whose canonical key is empty (an empty or all-blank code under
/// [`Normalization::Trim`]) is rejected.
///
/// ```rust
/// use identity_values::identity::{CanonicalId, Normalization};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let a = CanonicalId::new("productCode", "A001", Normalization::Trim)?;
///     let b = CanonicalId::new("productCode", " A001 ", Normalization::Trim)?;
///     assert_eq!(a, b);
///     assert_eq!(b.as_str(), " A001 ");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CanonicalId {
    raw: String,
    key: String,
    rule: Normalization,
}

impl CanonicalId {
    /// Create a new CanonicalId, naming the field it belongs to for errors.
    pub fn new(
        field: &'static str,
        raw: impl Into<String>,
        rule: Normalization,
    ) -> ValueResult<Self> {
        let raw = raw.into();
        let key = rule.apply(&raw);
        if let Verdict::Rejected(reason) = MinLength::new(1).check(&key) {
            return Err(ValueError::invalid_argument(field, reason));
        }
        Ok(Self { raw, key, rule })
    }

    /// The text exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The canonical comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn rule(&self) -> Normalization {
        self.rule
    }

    /// Whether bare text would normalize to this identifier's key.
    pub fn matches(&self, raw: &str) -> bool {
        self.rule.apply(raw) == self.key
    }
}

impl PartialEq for CanonicalId {
    fn eq(&self, other: &Self) -> bool {
        self.rule == other.rule && self.key == other.key
    }
}

impl Eq for CanonicalId {}

impl Hash for CanonicalId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rule.hash(state);
        self.key.hash(state);
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for CanonicalId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}
