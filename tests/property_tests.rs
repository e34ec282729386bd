//! Property-based tests for validation and date predicates.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};
use proptest::prelude::*;
use regex::Regex;
use shapeguard::core::{Kind, Record, Value};
use shapeguard::date::{is_date_range, is_reasonable_year_number};
use shapeguard::patterns;
use shapeguard::rules::{ErrorPayload, FailureKind, RegexRule, TypeRule};
use shapeguard::validate::{validate_object, validate_partial_object};

prop_compose! {
    fn arbitrary_kind()(variant in 0..8u8) -> Kind {
        match variant {
            0 => Kind::String,
            1 => Kind::Number,
            2 => Kind::Bigint,
            3 => Kind::Boolean,
            4 => Kind::Symbol,
            5 => Kind::Undefined,
            6 => Kind::Object,
            _ => Kind::Function,
        }
    }
}

fn arbitrary_primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        any::<i64>().prop_map(|n| Value::BigInt(n as i128)),
        "[a-z]{0,8}".prop_map(Value::String),
        "[a-z]{1,4}".prop_map(Value::Symbol),
        "[a-z]{1,4}".prop_map(Value::Function),
    ]
}

fn arbitrary_non_object() -> impl Strategy<Value = Value> {
    prop_oneof![
        arbitrary_primitive(),
        prop::collection::vec(arbitrary_primitive(), 0..4).prop_map(Value::Array),
    ]
}

fn arbitrary_object() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z]{1,6}", arbitrary_primitive(), 0..6)
        .prop_map(|map| Value::Object(map.into_iter().collect::<Record>()))
}

fn arbitrary_instant() -> impl Strategy<Value = DateTime<Utc>> {
    // 1900-01-01 .. 2099-12-31
    (-2_208_988_800i64..4_102_358_400i64, 0u32..1000)
        .prop_map(|(secs, millis)| Utc.timestamp_opt(secs, millis * 1_000_000).unwrap())
}

proptest! {
    #[test]
    fn non_objects_always_fail_without_raising(
        target in arbitrary_non_object(),
        kind in arbitrary_kind(),
    ) {
        let rules = [TypeRule::new("p", kind)
            .with_error(ErrorPayload::invalid_request("p is invalid."))];

        prop_assert_eq!(validate_object(&target, &rules, &[], &[]), Ok(false));
        prop_assert_eq!(validate_object(&target, &[], &[], &[]), Ok(false));
    }

    #[test]
    fn objects_pass_empty_rule_lists(target in arbitrary_object()) {
        prop_assert_eq!(validate_object(&target, &[], &[], &[]), Ok(true));
    }

    #[test]
    fn null_passes_only_when_allowed(kind in arbitrary_kind()) {
        let target = Value::Object(Record::from([("p".to_string(), Value::Null)]));
        let strict = [TypeRule::new("p", kind)];
        let lenient = [TypeRule::new("p", kind).allow_null()];

        prop_assert_eq!(validate_object(&target, &lenient, &[], &[]), Ok(true));
        // `null` reports `object`, so only an object rule accepts it unflagged.
        prop_assert_eq!(
            validate_object(&target, &strict, &[], &[]),
            Ok(kind == Kind::Object)
        );
    }

    #[test]
    fn type_rule_passes_exactly_on_matching_kind(
        value in arbitrary_primitive(),
        kind in arbitrary_kind(),
    ) {
        let target = Value::Object(Record::from([("p".to_string(), value.clone())]));
        let rules = [TypeRule::new("p", kind)];

        prop_assert_eq!(
            validate_object(&target, &rules, &[], &[]),
            Ok(value.kind() == kind)
        );
    }

    #[test]
    fn first_raising_rule_wins(target in arbitrary_object()) {
        let first = ErrorPayload::new("FirstError", "first");
        let rules = [
            TypeRule::new("__absent_first", Kind::String).with_error(first.clone()),
            TypeRule::new("__absent_second", Kind::String)
                .with_error(ErrorPayload::new("SecondError", "second")),
        ];

        let err = validate_object(&target, &rules, &[], &[]).unwrap_err();
        prop_assert_eq!(err.payload(), &first);
        prop_assert_eq!(err.kind(), FailureKind::MissingProperty);
    }

    #[test]
    fn unknown_key_raises_regardless_of_declared_field(foo in "[a-z]{0,6}") {
        let rules = [RegexRule::new("foo", Regex::new("^bar$").unwrap())];
        let target = Value::Object(Record::from([
            ("foo".to_string(), Value::String(foo)),
            ("baz".to_string(), Value::Bool(true)),
        ]));

        let err = validate_partial_object(&target, &rules).unwrap_err();
        prop_assert_eq!(err.kind(), FailureKind::UnknownField);
        prop_assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn iso_output_matches_iso_pattern(instant in arbitrary_instant()) {
        let iso = instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
        prop_assert!(patterns::iso_date().is_match(&iso), "{}", iso);
    }

    #[test]
    fn quarter_hours_match_15min_pattern(
        instant in arbitrary_instant(),
        quarter in 0i64..4,
    ) {
        let hour = Utc
            .with_ymd_and_hms(instant.year(), instant.month(), instant.day(), instant.hour(), 0, 0)
            .unwrap();
        let slot = hour + Duration::minutes(15 * quarter);
        let iso = slot.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();

        prop_assert!(patterns::iso_date_15min_increments().is_match(&iso), "{}", iso);
    }

    #[test]
    fn reasonable_year_matches_open_interval(year in 1900i32..2100) {
        prop_assert_eq!(
            is_reasonable_year_number(year as f64),
            year > 2000 && year < 2050
        );
    }

    #[test]
    fn date_range_requires_increasing_bounds(
        start in arbitrary_instant(),
        end in arbitrary_instant(),
    ) {
        let target = Value::Object(Record::from([
            ("start".to_string(), Value::from(start)),
            ("end".to_string(), Value::from(end)),
        ]));
        prop_assert_eq!(is_date_range(&target), start < end);
    }
}
