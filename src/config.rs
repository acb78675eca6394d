//! Configuration for entity validation limits.
//!
//! The limits every entity enforces live in one [`Limits`] value instead of
//! being scattered through setters as constants. Entities built with plain
//! constructors use [`Limits::default`]; `blank(&Limits)` constructors take an
//! explicit configuration, which may be loaded from JSON.
//!
//! ```rust
//! use identity_values::config::Limits;
//! use identity_values::field::FieldPolicy;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let limits = Limits::from_json(r#"{ "hp_policy": "reject_and_preserve" }"#)?;
//!     assert_eq!(limits.hp_policy, FieldPolicy::RejectAndPreserve);
//!     assert_eq!(limits.name_min_chars, 3);
//!     Ok(())
//! }
//! ```

use crate::error::{ValidationError, ValueError, ValueResult};
use crate::field::FieldPolicy;
use crate::validation::{MinLength, NumericRange};
use serde::{Deserialize, Serialize};

/// Validation limits shared by the entities in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Minimum number of characters in a wand, wizard or hero name
    pub name_min_chars: usize,

    /// Smallest accepted wand power multiplier
    pub power_min: f64,

    /// Largest accepted wand power multiplier
    pub power_max: f64,

    /// Hit points a heal restores before the wand multiplier
    pub base_recovery: i64,

    /// What hit point fields do with negative values.
    /// Defaults to clamping at zero.
    pub hp_policy: FieldPolicy,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            name_min_chars: 3,
            power_min: 0.5,
            power_max: 100.0,
            base_recovery: 10,
            hp_policy: FieldPolicy::Clamp,
        }
    }
}

impl Limits {
    /// Parse limits from JSON, filling absent keys with defaults.
    pub fn from_json(json: &str) -> ValueResult<Self> {
        let limits: Self = serde_json::from_str(json)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Check that the limits describe satisfiable rules.
    ///
    /// Negative wand power or base recovery would turn a heal into damage, so
    /// both must be at least zero.
    pub fn validate(&self) -> ValueResult<()> {
        if self.power_min.is_nan() || self.power_min < 0.0 {
            return Err(ValueError::invalid_argument(
                "power_min",
                ValidationError::negative(self.power_min),
            ));
        }
        if self.base_recovery < 0 {
            return Err(ValueError::invalid_argument(
                "base_recovery",
                ValidationError::negative(self.base_recovery),
            ));
        }
        self.power_range()?;
        Ok(())
    }

    /// The name length rule these limits describe.
    pub fn name_rule(&self) -> MinLength {
        MinLength::new(self.name_min_chars)
    }

    /// The wand power rule these limits describe.
    pub fn power_range(&self) -> ValueResult<NumericRange<f64>> {
        NumericRange::new(self.power_min, self.power_max)
            .map_err(|reason| ValueError::invalid_argument("power_range", reason))
    }

    pub fn with_hp_policy(mut self, policy: FieldPolicy) -> Self {
        self.hp_policy = policy;
        self
    }

    pub fn with_base_recovery(mut self, base_recovery: i64) -> Self {
        self.base_recovery = base_recovery;
        self
    }
}
