//! Wizards healing heroes through shared wands and explicit counters.

use crate::common::fixtures::{elder_wand, hero_with_hp, merlin};
use crate::common::init_logging;
use identity_values::entities::{Hero, Wand, Wizard};
use identity_values::{ChargeCounter, FieldPolicy, Limits};
use std::sync::Arc;

#[test]
fn test_heal_uses_wand_multiplier() {
    init_logging();
    let wizard = merlin(elder_wand(3.0));
    let mut hero = hero_with_hp(5);

    assert_eq!(wizard.heal(&mut hero).unwrap(), 30);
    assert_eq!(hero.hp().unwrap(), 35);
}

#[test]
fn test_wand_outlives_wizard() {
    let wand = elder_wand(2.0);
    {
        let wizard = merlin(Arc::clone(&wand));
        assert_eq!(wizard.recovery_points().unwrap(), 20);
    }
    assert_eq!(Arc::strong_count(&wand), 1);
    assert_eq!(wand.name().unwrap(), "Elder");
}

#[test]
fn test_blank_wizard_reports_unset_fields() {
    let wizard = Wizard::blank(&Limits::default()).unwrap();
    crate::assert_uninitialized!(wizard.name(), "name");
    crate::assert_uninitialized!(wizard.wand(), "wand");
    assert_eq!(wizard.hp().unwrap(), 0);
}

#[test]
fn test_wand_with_unset_power_cannot_heal() {
    let mut wand = Wand::blank(&Limits::default()).unwrap();
    wand.set_name("Birch").unwrap();
    let wizard = Wizard::new("Merlin", Arc::new(wand)).unwrap();
    let mut hero = hero_with_hp(1);

    crate::assert_uninitialized!(wizard.heal(&mut hero), "power");
    assert_eq!(hero.hp().unwrap(), 1);
}

#[test]
fn test_separate_counters_are_not_shared() {
    let first = merlin(elder_wand(1.0));
    let second = Wizard::new("Morgana", elder_wand(1.0)).unwrap();
    let mut hero = hero_with_hp(0);

    let mut first_charges = ChargeCounter::new(1, 1).unwrap();
    let mut second_charges = ChargeCounter::new(1, 1).unwrap();

    assert_eq!(first.cast_heal(&mut hero, &mut first_charges).unwrap(), Some(10));
    assert_eq!(second.cast_heal(&mut hero, &mut second_charges).unwrap(), Some(10));
    assert_eq!(first.cast_heal(&mut hero, &mut first_charges).unwrap(), None);
    assert_eq!(hero.hp().unwrap(), 20);
}

#[test]
fn test_shared_counter_is_explicit() {
    let first = merlin(elder_wand(1.0));
    let second = Wizard::new("Morgana", elder_wand(1.0)).unwrap();
    let mut hero = hero_with_hp(0);
    let mut shared = ChargeCounter::new(1, 1).unwrap();

    assert!(first.cast_heal(&mut hero, &mut shared).unwrap().is_some());
    assert!(second.cast_heal(&mut hero, &mut shared).unwrap().is_none());
}

#[test]
fn test_limits_loaded_from_json_drive_entities() {
    let limits = Limits::from_json(
        r#"{ "name_min_chars": 2, "base_recovery": 4, "hp_policy": "reject_and_preserve" }"#,
    )
    .unwrap();
    assert_eq!(limits.hp_policy, FieldPolicy::RejectAndPreserve);

    let mut hero = Hero::blank(&limits).unwrap();
    hero.set_name("Al").unwrap();
    crate::assert_invalid_argument!(hero.set_hp(-1), "hp");

    let mut wizard = Wizard::blank(&limits).unwrap();
    wizard.set_wand(Some(elder_wand(2.5))).unwrap();
    assert_eq!(wizard.heal(&mut hero).unwrap(), 10);
    assert_eq!(hero.hp().unwrap(), 10);
}
