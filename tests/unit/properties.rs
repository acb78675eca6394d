//! Property tests for validated fields and identity equality.
//!
//! Each property is checked over generated inputs with proptest.

use identity_values::entities::{Member, Product};
use identity_values::validation::{MinLength, NonNegative, NumericRange};
use identity_values::{Assignment, Normalization, ValidatedField};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn name_field() -> ValidatedField<String> {
    let mut field = ValidatedField::new("name", MinLength::new(3));
    field
        .try_set("Initial".to_string())
        .expect("fixture name is long enough");
    field
}

fn power_field() -> ValidatedField<f64> {
    let mut field = ValidatedField::new(
        "power",
        NumericRange::new(0.5, 100.0).expect("fixture bounds are ordered"),
    );
    field.try_set(1.0).expect("fixture power is in range");
    field
}

proptest! {
    #[test]
    fn test_long_names_accepted_verbatim(name in "\\PC{3,40}") {
        let mut field = name_field();
        prop_assert_eq!(field.try_set(name.clone()).unwrap(), Assignment::Stored);
        prop_assert_eq!(field.get().unwrap(), &name);
    }

    #[test]
    fn test_short_names_rejected_and_preserved(name in "\\PC{0,2}") {
        let mut field = name_field();
        prop_assert!(field.try_set(name).is_err());
        prop_assert_eq!(field.get().unwrap().as_str(), "Initial");
    }

    #[test]
    fn test_power_in_range_accepted(power in 0.5f64..=100.0) {
        let mut field = power_field();
        prop_assert!(field.try_set(power).is_ok());
        prop_assert_eq!(*field.get().unwrap(), power);
    }

    #[test]
    fn test_power_out_of_range_rejected(
        power in prop_oneof![-1.0e9f64..0.5, 100.000_001f64..1.0e9]
    ) {
        let mut field = power_field();
        prop_assert!(field.try_set(power).is_err());
        prop_assert_eq!(*field.get().unwrap(), 1.0);
    }

    #[test]
    fn test_clamp_never_goes_negative(hp in any::<i64>()) {
        let mut field = ValidatedField::clamped("hp", NonNegative)
            .with_initial(0_i64)
            .unwrap();
        prop_assert!(field.try_set(hp).is_ok());
        prop_assert_eq!(*field.get().unwrap(), hp.max(0));
    }

    #[test]
    fn test_repeated_assignment_is_idempotent(points in 0i64..1_000_000) {
        let mut member = Member::new("M001", points).unwrap();
        let before = member.to_string();
        prop_assert!(member.set_points(points).is_ok());
        prop_assert!(member.set_points(points).is_ok());
        prop_assert_eq!(member.to_string(), before);
    }

    #[test]
    fn test_case_variants_of_member_ids_are_equal(id in "[A-Za-z][A-Za-z0-9]{0,11}") {
        let upper = Member::new(id.to_uppercase(), 1).unwrap();
        let lower = Member::new(id.to_lowercase(), 2).unwrap();
        prop_assert_eq!(&upper, &lower);
        prop_assert_eq!(hash_of(&upper), hash_of(&lower));
    }

    #[test]
    fn test_padded_product_codes_are_equal(
        code in "[A-Z][A-Z0-9]{0,9}",
        left in "[ \t]{0,3}",
        right in "[ \t]{0,3}",
    ) {
        let plain = Product::new(code.clone(), 1).unwrap();
        let padded = Product::new(format!("{}{}{}", left, code, right), 2).unwrap();
        prop_assert_eq!(&plain, &padded);
        prop_assert_eq!(hash_of(&plain), hash_of(&padded));
    }

    #[test]
    fn test_equal_keys_imply_equal_entities(a in "[a-cA-C]{1,3}", b in "[a-cA-C]{1,3}") {
        let left = Member::new(a.clone(), 0).unwrap();
        let right = Member::new(b.clone(), 0).unwrap();
        prop_assert_eq!(left == right, Normalization::CaseFold.same_key(&a, &b));
        if left == right {
            prop_assert_eq!(hash_of(&left), hash_of(&right));
        }
    }
}
