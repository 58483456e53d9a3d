//! Property tests for the validator.

use proptest::prelude::*;

use neo_core::validate_unid;

fn seven_digits() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{7}").expect("valid regex")
}

proptest! {
    #[test]
    fn zero_leading_eight_digit_ids_always_convert(tail in seven_digits()) {
        let raw = format!("0{tail}");
        let unid = validate_unid(&raw).expect("valid raw id");
        prop_assert_eq!(unid.as_str(), format!("u{tail}"));
    }

    #[test]
    fn conversion_is_injective(a in seven_digits(), b in seven_digits()) {
        prop_assume!(a != b);
        let left = validate_unid(&format!("0{a}")).expect("valid raw id");
        let right = validate_unid(&format!("0{b}")).expect("valid raw id");
        prop_assert_ne!(left, right);
    }

    #[test]
    fn validation_is_total_over_arbitrary_strings(raw in ".*") {
        // Every input produces exactly one of value or reason; no panics.
        let _ = validate_unid(&raw);
    }

    #[test]
    fn non_zero_leading_eight_digit_ids_are_rejected(raw in "[1-9][0-9]{7}") {
        prop_assert!(validate_unid(&raw).is_err());
    }
}
