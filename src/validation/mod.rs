//! Validators that decide whether a candidate value may be stored.
//!
//! A validator is a pure, total predicate: it inspects a candidate and returns
//! a [`Verdict`]. It never mutates anything and never panics, whatever the
//! input (empty text, `None`, NaN, values far outside a range).
//!
//! ## Usage Pattern
//!
//! ```rust
//! use identity_values::validation::{MinLength, Validator, Verdict};
//!
//! let rule = MinLength::new(3);
//! assert_eq!(rule.check(&"Merlin"), Verdict::Accepted);
//! assert!(!rule.check(&"Al").is_accepted());
//! ```

mod rules;

pub use rules::{MinLength, NonNegative, NotNull, NumericRange, Unconstrained};

use crate::error::{ValidationError, ValidationResult};
use std::fmt::Debug;

/// Outcome of checking one candidate value.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The candidate satisfies the rule
    Accepted,
    /// The candidate violates the rule, with the reason
    Rejected(ValidationError),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// Convert into a `Result` so verdicts compose with `?`.
    pub fn into_result(self) -> ValidationResult<()> {
        match self {
            Verdict::Accepted => Ok(()),
            Verdict::Rejected(reason) => Err(reason),
        }
    }
}

impl From<ValidationResult<()>> for Verdict {
    fn from(result: ValidationResult<()>) -> Self {
        match result {
            Ok(()) => Verdict::Accepted,
            Err(reason) => Verdict::Rejected(reason),
        }
    }
}

/// Core trait for every validation rule.
///
/// Implementations are stateless apart from their configured bounds, so they
/// are shared between fields through `Arc<dyn Validator<T>>`.
pub trait Validator<T>: Debug + Send + Sync {
    /// Check a candidate value against this rule.
    fn check(&self, candidate: &T) -> Verdict;

    /// The closest value this rule would accept, if there is one.
    ///
    /// Fields configured with clamp semantics store this value instead of
    /// reporting an error. Rules without a meaningful nearest value return
    /// `None` and the candidate is rejected even under clamp semantics.
    fn nearest_valid(&self, _candidate: &T) -> Option<T> {
        None
    }
}
