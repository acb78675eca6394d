//! Wand entity: a named power multiplier used by wizards.

use crate::config::Limits;
use crate::error::ValueResult;
use crate::field::{Assignment, ValidatedField};
use std::fmt;

/// A magic wand.
///
/// The name needs at least three characters and the power multiplier must lie
/// in `[0.5, 100]` (both configurable through [`Limits`]). Invalid assignments
/// are rejected and leave the previous value in place.
#[derive(Debug, Clone)]
pub struct Wand {
    name: ValidatedField<String>,
    power: ValidatedField<f64>,
}

impl Wand {
    /// Create a wand with both fields uninitialized.
    pub fn blank(limits: &Limits) -> ValueResult<Self> {
        limits.validate()?;
        Ok(Self {
            name: ValidatedField::new("name", limits.name_rule()),
            power: ValidatedField::new("power", limits.power_range()?),
        })
    }

    /// Create a wand with default limits.
    pub fn new(name: impl Into<String>, power: f64) -> ValueResult<Self> {
        let mut wand = Self::blank(&Limits::default())?;
        wand.set_name(name)?;
        wand.set_power(power)?;
        Ok(wand)
    }

    pub fn name(&self) -> ValueResult<&str> {
        self.name.get().map(String::as_str)
    }

    pub fn power(&self) -> ValueResult<f64> {
        self.power.get().copied()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ValueResult<Assignment> {
        self.name.try_set(name.into())
    }

    /// Set the name from a value that may be missing.
    pub fn set_name_opt(&mut self, name: Option<String>) -> ValueResult<Assignment> {
        self.name.try_set_option(name)
    }

    pub fn set_power(&mut self, power: f64) -> ValueResult<Assignment> {
        self.power.try_set(power)
    }
}

impl fmt::Display for Wand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(魔力:{})", self.name, self.power)
    }
}
