//! Settable slots that validate before they commit.
//!
//! A [`ValidatedField`] starts uninitialized and only changes through
//! [`ValidatedField::try_set`]. The validator runs before anything is written,
//! so a rejected candidate leaves the previous value exactly as it was.
//!
//! Two policies decide what happens to a rejected candidate:
//!
//! - [`FieldPolicy::RejectAndPreserve`] reports an
//!   [`InvalidArgument`](crate::error::ValueError::InvalidArgument) error.
//! - [`FieldPolicy::Clamp`] stores the validator's nearest valid value instead
//!   and reports success.
//!
//! ```rust
//! use identity_values::field::{Assignment, ValidatedField};
//! use identity_values::validation::NonNegative;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut hp = ValidatedField::clamped("hp", NonNegative).with_initial(0_i64)?;
//! assert!(matches!(hp.try_set(-5)?, Assignment::Clamped { .. }));
//! assert_eq!(*hp.get()?, 0);
//! # Ok(())
//! # }
//! ```

use crate::error::{ValidationError, ValueError, ValueResult};
use crate::validation::{NotNull, Validator, Verdict};
use log::{debug, info};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// What a field does with a candidate its validator rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Refuse the candidate, keep the old value, report the reason
    #[default]
    RejectAndPreserve,
    /// Store the nearest valid value instead, report nothing
    Clamp,
}

/// Result of a successful assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// The candidate was stored as given
    Stored,
    /// The candidate was replaced by the nearest valid value
    Clamped {
        /// Why the original candidate was not stored as given
        reason: ValidationError,
    },
}

/// A named slot holding a value that always satisfies its validator.
#[derive(Clone)]
pub struct ValidatedField<T> {
    name: &'static str,
    value: Option<T>,
    validator: Arc<dyn Validator<T>>,
    policy: FieldPolicy,
}

impl<T> ValidatedField<T>
where
    T: fmt::Debug,
{
    /// Create an uninitialized field with reject-and-preserve semantics.
    pub fn new(name: &'static str, validator: impl Validator<T> + 'static) -> Self {
        Self::with_policy(name, validator, FieldPolicy::RejectAndPreserve)
    }

    /// Create an uninitialized field with clamp semantics.
    pub fn clamped(name: &'static str, validator: impl Validator<T> + 'static) -> Self {
        Self::with_policy(name, validator, FieldPolicy::Clamp)
    }

    pub fn with_policy(
        name: &'static str,
        validator: impl Validator<T> + 'static,
        policy: FieldPolicy,
    ) -> Self {
        Self {
            name,
            value: None,
            validator: Arc::new(validator),
            policy,
        }
    }

    /// Initialize the field as part of construction.
    ///
    /// The initial value goes through the same validation as any later
    /// assignment.
    pub fn with_initial(mut self, value: T) -> ValueResult<Self> {
        self.try_set(value)?;
        Ok(self)
    }

    /// Validate `candidate` and store it if the policy allows.
    ///
    /// On error the field is untouched. On success the stored value is
    /// visible through [`get`](Self::get) immediately.
    pub fn try_set(&mut self, candidate: T) -> ValueResult<Assignment> {
        let reason = match self.validator.check(&candidate) {
            Verdict::Accepted => {
                debug!("Field '{}' accepted {:?}", self.name, candidate);
                self.value = Some(candidate);
                return Ok(Assignment::Stored);
            }
            Verdict::Rejected(reason) => reason,
        };

        if self.policy == FieldPolicy::Clamp {
            if let Some(nearest) = self.validator.nearest_valid(&candidate) {
                info!(
                    "Field '{}' clamped {:?} to {:?}: {}",
                    self.name, candidate, nearest, reason
                );
                self.value = Some(nearest);
                return Ok(Assignment::Clamped { reason });
            }
        }

        debug!(
            "Field '{}' rejected {:?}: {}",
            self.name, candidate, reason
        );
        Err(ValueError::invalid_argument(self.name, reason))
    }

    /// Whether [`try_set`](Self::try_set) would succeed for `candidate`,
    /// without storing anything.
    pub fn check(&self, candidate: &T) -> ValueResult<()> {
        match self.validator.check(candidate) {
            Verdict::Accepted => Ok(()),
            Verdict::Rejected(_)
                if self.policy == FieldPolicy::Clamp
                    && self.validator.nearest_valid(candidate).is_some() =>
            {
                Ok(())
            }
            Verdict::Rejected(reason) => Err(ValueError::invalid_argument(self.name, reason)),
        }
    }

    /// Like [`try_set`](Self::try_set), but rejects `None` first.
    pub fn try_set_option(&mut self, candidate: Option<T>) -> ValueResult<Assignment> {
        match (NotNull.check(&candidate), candidate) {
            (Verdict::Accepted, Some(value)) => self.try_set(value),
            (verdict, _) => {
                let reason = match verdict {
                    Verdict::Rejected(reason) => reason,
                    Verdict::Accepted => ValidationError::MissingValue,
                };
                debug!("Field '{}' rejected a missing value", self.name);
                Err(ValueError::invalid_argument(self.name, reason))
            }
        }
    }

    /// The current value.
    ///
    /// Reading a field that never accepted a value is an
    /// [`UninitializedAccess`](ValueError::UninitializedAccess) error.
    pub fn get(&self) -> ValueResult<&T> {
        self.value
            .as_ref()
            .ok_or_else(|| ValueError::uninitialized(self.name))
    }

    /// The current value, if any, without treating absence as an error.
    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> FieldPolicy {
        self.policy
    }
}

impl<T> fmt::Debug for ValidatedField<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedField")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("validator", &self.validator)
            .field("policy", &self.policy)
            .finish()
    }
}

/// Displays the value, or `-` while the field is uninitialized.
impl<T> fmt::Display for ValidatedField<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "-"),
        }
    }
}

impl<T> Serialize for ValidatedField<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}
