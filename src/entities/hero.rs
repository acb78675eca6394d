//! Hero entity.

use crate::config::Limits;
use crate::error::ValueResult;
use crate::field::{Assignment, ValidatedField};
use crate::validation::NonNegative;
use std::fmt;

/// A hero whose hit points are healed by wizards.
///
/// Hit points start at zero. With the default limits a negative value is
/// floored to zero rather than rejected.
#[derive(Debug, Clone)]
pub struct Hero {
    name: ValidatedField<String>,
    hp: ValidatedField<i64>,
}

impl Hero {
    pub fn blank(limits: &Limits) -> ValueResult<Self> {
        Ok(Self {
            name: ValidatedField::new("name", limits.name_rule()),
            hp: ValidatedField::with_policy("hp", NonNegative, limits.hp_policy)
                .with_initial(0_i64)?,
        })
    }

    pub fn new(name: impl Into<String>) -> ValueResult<Self> {
        let mut hero = Self::blank(&Limits::default())?;
        hero.set_name(name)?;
        Ok(hero)
    }

    pub fn name(&self) -> ValueResult<&str> {
        self.name.get().map(String::as_str)
    }

    pub fn hp(&self) -> ValueResult<i64> {
        self.hp.get().copied()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ValueResult<Assignment> {
        self.name.try_set(name.into())
    }

    pub fn set_hp(&mut self, hp: i64) -> ValueResult<Assignment> {
        self.hp.try_set(hp)
    }

    /// Whether [`set_hp`](Self::set_hp) would accept `hp`, without changing
    /// the hero.
    pub fn check_hp(&self, hp: i64) -> ValueResult<()> {
        self.hp.check(&hp)
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(HP:{})", self.name, self.hp)
    }
}
