//! Property-based tests for value parsing.

use super::{parse_loose_number, parse_value};
use proptest::prelude::*;
use serde_json::{json, Value};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Parsing is total: every non-empty input yields some value
    #[test]
    fn parse_never_absent_for_non_empty(raw in ".+") {
        prop_assert!(parse_value(&raw).is_some());
    }

    // Leading whitespace always preserves the raw text
    #[test]
    fn leading_whitespace_is_literal(ws in "[ \t\n]{1,3}", rest in ".*") {
        let raw = format!("{ws}{rest}");
        prop_assert_eq!(parse_value(&raw), Some(Value::String(raw.clone())));
    }

    // Integers round-trip through their decimal form
    #[test]
    fn integers_parse_exactly(n in -9_007_199_254_740_991_i64..=9_007_199_254_740_991) {
        prop_assert_eq!(parse_value(&n.to_string()), Some(json!(n)));
    }

    // Integers with a trailing point are still integers
    #[test]
    fn trailing_point_is_integral(n in 0u32..1_000_000) {
        prop_assert_eq!(parse_value(&format!("{n}.")), Some(json!(n)));
    }

    // More than one decimal point is never numeric
    #[test]
    fn double_point_never_numeric(a in "[0-9]{0,4}", b in "[0-9]{0,4}", c in "[0-9]{0,4}") {
        let raw = format!("{a}.{b}.{c}");
        prop_assert!(parse_loose_number(&raw).is_none());
        prop_assert_eq!(parse_value(&raw), Some(Value::String(raw.clone())));
    }

    // Letters other than an exponent marker make a string
    #[test]
    fn alphabetic_suffix_is_string(n in 1u32..1000, suffix in "[a-df-zA-DF-Z]{1,5}") {
        let raw = format!("{n}{suffix}");
        prop_assert_eq!(parse_value(&raw), Some(Value::String(raw.clone())));
    }

    // Serialized JSON objects parse back to the same structure
    #[test]
    fn json_objects_round_trip(
        key in "[a-z]{1,8}",
        text in "[a-zA-Z ]{0,10}",
        num in any::<i32>(),
        flag in any::<bool>(),
    ) {
        let obj = json!({ key: { "text": text, "num": num, "flag": flag } });
        prop_assert_eq!(parse_value(&obj.to_string()), Some(obj));
    }
}
