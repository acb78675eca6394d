//! Validated field behaviour through the public API.

use crate::common::init_logging;
use identity_values::validation::{MinLength, NonNegative, NumericRange, Unconstrained};
use identity_values::{Assignment, FieldPolicy, ValidatedField, ValidationError};

#[test]
fn test_name_field_accepts_three_or_more_characters() {
    init_logging();
    let mut name: ValidatedField<String> = ValidatedField::new("name", MinLength::new(3));

    for candidate in ["abc", "Merlin", "ゆうしゃ"] {
        assert_eq!(name.try_set(candidate.to_string()).unwrap(), Assignment::Stored);
        assert_eq!(name.get().unwrap(), candidate);
    }
}

#[test]
fn test_name_field_rejects_short_or_missing_and_preserves() {
    let mut name: ValidatedField<String> = ValidatedField::new("name", MinLength::new(3));
    name.try_set("Merlin".to_string()).unwrap();

    crate::assert_invalid_argument!(name.try_set("ab".to_string()), "name");
    crate::assert_invalid_argument!(name.try_set(String::new()), "name");
    crate::assert_invalid_argument!(name.try_set_option(None), "name");

    assert_eq!(name.get().unwrap(), "Merlin");
}

#[test]
fn test_power_field_closed_interval() {
    let mut power: ValidatedField<f64> =
        ValidatedField::new("power", NumericRange::new(0.5, 100.0).unwrap());
    power.try_set(1.0).unwrap();

    for valid in [0.5, 1.5, 99.99, 100.0] {
        power.try_set(valid).unwrap();
        assert_eq!(*power.get().unwrap(), valid);
    }
    for invalid in [0.0, 0.4999, 100.0001, -3.0, f64::NAN, f64::INFINITY] {
        crate::assert_invalid_argument!(power.try_set(invalid), "power");
        assert_eq!(*power.get().unwrap(), 100.0);
    }
}

#[test]
fn test_clamp_field_reports_no_error() {
    init_logging();
    let mut hp = ValidatedField::clamped("hp", NonNegative)
        .with_initial(50_i64)
        .unwrap();

    let outcome = hp.try_set(-5).unwrap();
    assert_eq!(
        outcome,
        Assignment::Clamped {
            reason: ValidationError::negative(-5)
        }
    );
    assert_eq!(*hp.get().unwrap(), 0);
    assert_eq!(hp.policy(), FieldPolicy::Clamp);
}

#[test]
fn test_policy_is_chosen_per_field() {
    let mut clamped = ValidatedField::with_policy("hp", NonNegative, FieldPolicy::Clamp)
        .with_initial(10_i64)
        .unwrap();
    let mut rejecting =
        ValidatedField::with_policy("hp", NonNegative, FieldPolicy::RejectAndPreserve)
            .with_initial(10_i64)
            .unwrap();

    assert!(clamped.try_set(-1).is_ok());
    assert!(rejecting.try_set(-1).is_err());
    assert_eq!(*clamped.get().unwrap(), 0);
    assert_eq!(*rejecting.get().unwrap(), 10);
}

#[test]
fn test_uninitialized_read_fails_loudly() {
    let field: ValidatedField<i64> = ValidatedField::new("mp", NonNegative);
    crate::assert_uninitialized!(field.get(), "mp");
}

#[test]
fn test_zero_is_a_real_value() {
    let mut field: ValidatedField<i64> = ValidatedField::new("points", Unconstrained);
    assert!(field.get().is_err());
    field.try_set(0).unwrap();
    assert_eq!(*field.get().unwrap(), 0);
}

#[test]
fn test_cloned_field_is_independent() {
    let mut original: ValidatedField<String> = ValidatedField::new("name", MinLength::new(3));
    original.try_set("Merlin".to_string()).unwrap();

    let mut copy = original.clone();
    copy.try_set("Morgana".to_string()).unwrap();

    assert_eq!(original.get().unwrap(), "Merlin");
    assert_eq!(copy.get().unwrap(), "Morgana");
}
