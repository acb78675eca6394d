//! Wizard entity: heals heroes through a shared wand.

use super::{Hero, Wand};
use crate::config::Limits;
use crate::context::ChargeCounter;
use crate::error::ValueResult;
use crate::field::{Assignment, ValidatedField};
use crate::validation::{NonNegative, Unconstrained};
use log::info;
use std::fmt;
use std::sync::Arc;

/// A wizard.
///
/// ## Validation Rules
///
/// - Name: at least three characters, rejected otherwise
/// - HP: starts at zero; negative values are floored to zero by default
/// - MP: negative values are rejected
/// - Wand: must be present
///
/// The wand is held through an `Arc`: the wizard uses it but does not own it,
/// and the same wand may be handed to several wizards.
#[derive(Debug, Clone)]
pub struct Wizard {
    name: ValidatedField<String>,
    hp: ValidatedField<i64>,
    mp: ValidatedField<i64>,
    wand: ValidatedField<Arc<Wand>>,
    base_recovery: i64,
}

impl Wizard {
    /// Create a wizard with every field except HP uninitialized.
    pub fn blank(limits: &Limits) -> ValueResult<Self> {
        limits.validate()?;
        Ok(Self {
            name: ValidatedField::new("name", limits.name_rule()),
            hp: ValidatedField::with_policy("hp", NonNegative, limits.hp_policy)
                .with_initial(0_i64)?,
            mp: ValidatedField::new("mp", NonNegative),
            wand: ValidatedField::new("wand", Unconstrained),
            base_recovery: limits.base_recovery,
        })
    }

    /// Create a named wizard holding `wand`, with default limits.
    pub fn new(name: impl Into<String>, wand: Arc<Wand>) -> ValueResult<Self> {
        let mut wizard = Self::blank(&Limits::default())?;
        wizard.set_name(name)?;
        wizard.set_wand(Some(wand))?;
        Ok(wizard)
    }

    pub fn name(&self) -> ValueResult<&str> {
        self.name.get().map(String::as_str)
    }

    pub fn hp(&self) -> ValueResult<i64> {
        self.hp.get().copied()
    }

    pub fn mp(&self) -> ValueResult<i64> {
        self.mp.get().copied()
    }

    pub fn wand(&self) -> ValueResult<&Arc<Wand>> {
        self.wand.get()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ValueResult<Assignment> {
        self.name.try_set(name.into())
    }

    pub fn set_hp(&mut self, hp: i64) -> ValueResult<Assignment> {
        self.hp.try_set(hp)
    }

    pub fn set_mp(&mut self, mp: i64) -> ValueResult<Assignment> {
        self.mp.try_set(mp)
    }

    /// Equip a wand. `None` is rejected and the current wand is kept.
    pub fn set_wand(&mut self, wand: Option<Arc<Wand>>) -> ValueResult<Assignment> {
        self.wand.try_set_option(wand)
    }

    /// Hit points one heal restores: the base recovery scaled by the wand's
    /// power, truncated toward zero.
    pub fn recovery_points(&self) -> ValueResult<i64> {
        let power = self.wand()?.power()?;
        Ok((self.base_recovery as f64 * power) as i64)
    }

    /// Heal `hero`, returning the hit points restored.
    ///
    /// Fails without touching the hero if the wizard has no wand, or the wand
    /// has no power set.
    pub fn heal(&self, hero: &mut Hero) -> ValueResult<i64> {
        let (recovered, healed) = self.planned_heal(hero)?;
        hero.set_hp(healed)?;
        info!("{} restored {} HP to {}", self.name, recovered, hero);
        Ok(recovered)
    }

    /// Heal `hero` if `charges` still has a use left.
    ///
    /// Returns `Ok(None)` when the counter is exhausted. The counter belongs to
    /// the caller; wizards share one only when given the same counter. A heal
    /// that would fail leaves both the hero and the counter unchanged.
    pub fn cast_heal(
        &self,
        hero: &mut Hero,
        charges: &mut ChargeCounter,
    ) -> ValueResult<Option<i64>> {
        let (recovered, healed) = self.planned_heal(hero)?;
        hero.check_hp(healed)?;
        if !charges.try_consume() {
            info!("{} has no charges left to heal {}", self.name, hero);
            return Ok(None);
        }
        hero.set_hp(healed)?;
        info!("{} restored {} HP to {}", self.name, recovered, hero);
        Ok(Some(recovered))
    }

    /// Points to restore and the hero's hit points afterwards.
    fn planned_heal(&self, hero: &Hero) -> ValueResult<(i64, i64)> {
        let recovered = self.recovery_points()?;
        let healed = hero.hp()?.saturating_add(recovered);
        Ok((recovered, healed))
    }
}

impl fmt::Display for Wizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(HP:{} MP:{})", self.name, self.hp, self.mp)
    }
}
