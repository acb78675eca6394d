//! Concrete validation rules.
//!
//! Each rule is a small value describing its bounds. Rules are generic over the
//! candidate type where that makes sense, so the same `NonNegative` works for
//! integer counters and floating point amounts.

use super::{Validator, Verdict};
use crate::error::{ValidationError, ValidationResult};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Rejects text with fewer than `min` characters.
///
/// Length is counted in Unicode scalar values, so "勇者ああ" has length 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLength {
    min: usize,
}

impl MinLength {
    pub fn new(min: usize) -> Self {
        Self { min }
    }

    pub fn min(&self) -> usize {
        self.min
    }
}

impl<S> Validator<S> for MinLength
where
    S: AsRef<str>,
{
    fn check(&self, candidate: &S) -> Verdict {
        let actual = candidate.as_ref().chars().count();
        if actual < self.min {
            Verdict::Rejected(ValidationError::TooShort {
                min: self.min,
                actual,
            })
        } else {
            Verdict::Accepted
        }
    }
}

/// Rejects numbers outside the inclusive range `[min, max]`.
///
/// NaN is outside every range. Under clamp semantics a value below the range
/// becomes `min` and a value above it becomes `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange<N> {
    min: N,
    max: N,
}

impl<N> NumericRange<N>
where
    N: PartialOrd + Copy + Display,
{
    /// Create a range, refusing bounds that cannot contain any value.
    pub fn new(min: N, max: N) -> ValidationResult<Self> {
        match min.partial_cmp(&max) {
            Some(Ordering::Less) | Some(Ordering::Equal) => Ok(Self { min, max }),
            _ => Err(ValidationError::InvalidBounds {
                min: min.to_string(),
                max: max.to_string(),
            }),
        }
    }

    pub fn min(&self) -> N {
        self.min
    }

    pub fn max(&self) -> N {
        self.max
    }
}

impl<N> Validator<N> for NumericRange<N>
where
    N: PartialOrd + Copy + Display + Debug + Send + Sync,
{
    fn check(&self, candidate: &N) -> Verdict {
        if self.min <= *candidate && *candidate <= self.max {
            Verdict::Accepted
        } else {
            Verdict::Rejected(ValidationError::out_of_range(
                candidate, self.min, self.max,
            ))
        }
    }

    fn nearest_valid(&self, candidate: &N) -> Option<N> {
        if *candidate < self.min {
            Some(self.min)
        } else if *candidate > self.max {
            Some(self.max)
        } else {
            None
        }
    }
}

/// Rejects numbers below zero. Zero itself is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonNegative;

impl<N> Validator<N> for NonNegative
where
    N: PartialOrd + Default + Copy + Display,
{
    fn check(&self, candidate: &N) -> Verdict {
        match candidate.partial_cmp(&N::default()) {
            Some(Ordering::Greater) | Some(Ordering::Equal) => Verdict::Accepted,
            _ => Verdict::Rejected(ValidationError::negative(candidate)),
        }
    }

    fn nearest_valid(&self, candidate: &N) -> Option<N> {
        let zero = N::default();
        (*candidate < zero).then_some(zero)
    }
}

/// Rejects an absent value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotNull;

impl<T> Validator<Option<T>> for NotNull {
    fn check(&self, candidate: &Option<T>) -> Verdict {
        match candidate {
            Some(_) => Verdict::Accepted,
            None => Verdict::Rejected(ValidationError::MissingValue),
        }
    }
}

/// Accepts every value.
///
/// Used for slots whose only requirement is presence, which
/// [`ValidatedField::try_set_option`](crate::field::ValidatedField::try_set_option)
/// already enforces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unconstrained;

impl<T> Validator<T> for Unconstrained {
    fn check(&self, _candidate: &T) -> Verdict {
        Verdict::Accepted
    }
}
