//! Behavioral properties of compatibility checks and conversions
//!
//! Covers:
//! - Null propagation
//! - Identity for values already of the target kind
//! - Numeric text round trips
//! - Choice resolution order
//! - Temporal text handling
//! - Record and map coercion

use fieldcast::{
    Coercer, ConversionFailure, DeclaredType, FieldKind, Record, RecordSchema, TemporalFormat,
    Value, ValueMap, choose_candidate, convert, is_compatible,
};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use std::sync::Arc;

fn address_schema() -> Arc<RecordSchema> {
    Arc::new(
        RecordSchema::builder()
            .field("city", DeclaredType::string())
            .field("zip", DeclaredType::Int)
            .build()
            .unwrap(),
    )
}

fn person_schema() -> Arc<RecordSchema> {
    Arc::new(
        RecordSchema::builder()
            .field("id", DeclaredType::Long)
            .field("born", DeclaredType::date())
            .field("address", DeclaredType::record(address_schema()))
            .build()
            .unwrap(),
    )
}

// === Null propagation ===

#[test]
fn test_null_converts_to_null_for_every_kind() {
    let types = [
        DeclaredType::record(address_schema()),
        DeclaredType::choice([DeclaredType::Int, DeclaredType::string()]),
        DeclaredType::date().with_format(TemporalFormat::new("%d.%m.%Y").unwrap()),
    ];
    for kind in FieldKind::ALL {
        assert_eq!(convert(&Value::Null, &DeclaredType::from(kind), "f").unwrap(), Value::Null);
    }
    for ty in types {
        assert_eq!(convert(&Value::Null, &ty, "f").unwrap(), Value::Null);
        assert!(!is_compatible(&Value::Null, &ty));
    }
}

// === Identity ===

#[rstest]
#[case(Value::Boolean(false), DeclaredType::Boolean)]
#[case(Value::Byte(i8::MIN), DeclaredType::Byte)]
#[case(Value::Long(i64::MAX), DeclaredType::Long)]
#[case(Value::BigInt(BigInt::from(i64::MIN) - 1u32), DeclaredType::BigInt)]
#[case(Value::Float(f32::MAX), DeclaredType::Float)]
#[case(Value::Char('é'), DeclaredType::Char)]
#[case(Value::string(""), DeclaredType::string())]
#[case(Value::timestamp(-1), DeclaredType::timestamp())]
#[case(Value::Array(vec![Value::Null, Value::Int(2)]), DeclaredType::Array)]
fn test_identity(#[case] value: Value, #[case] ty: DeclaredType) {
    assert!(is_compatible(&value, &ty));
    assert_eq!(convert(&value, &ty, "f").unwrap(), value);
}

#[test]
fn test_record_identity_keeps_schema() {
    let schema = address_schema();
    let record = Value::Record(Record::from_values(
        Arc::clone(&schema),
        [("city", Value::string("Oslo"))],
    ));
    let converted = convert(&record, &DeclaredType::record(schema), "a").unwrap();
    assert_eq!(converted, record);
}

// === Numeric text ===

proptest! {
    #[test]
    fn prop_long_text_round_trips(n in any::<i64>()) {
        prop_assert_eq!(convert(&Value::string(n.to_string()), &DeclaredType::Long, "n").unwrap(), Value::Long(n));
    }

    #[test]
    fn prop_int_text_round_trips(n in any::<i32>()) {
        let text = Value::string(n.to_string());
        prop_assert!(is_compatible(&text, &DeclaredType::Int));
        prop_assert_eq!(convert(&text, &DeclaredType::Int, "n").unwrap(), Value::Int(n));
    }

    #[test]
    fn prop_big_int_text_round_trips(digits in "-?[1-9][0-9]{0,60}") {
        let expected: BigInt = digits.parse().unwrap();
        prop_assert_eq!(
            convert(&Value::string(digits.as_str()), &DeclaredType::BigInt, "n").unwrap(),
            Value::BigInt(expected)
        );
    }

    #[test]
    fn prop_compatible_text_always_converts(text in "\\PC{0,12}") {
        let value = Value::string(text);
        for ty in [DeclaredType::Boolean, DeclaredType::Int, DeclaredType::Double, DeclaredType::date(), DeclaredType::Char] {
            if is_compatible(&value, &ty) {
                prop_assert!(convert(&value, &ty, "t").is_ok());
            }
        }
    }

    #[test]
    fn prop_numbers_become_epoch_millis(n in any::<i64>()) {
        prop_assert_eq!(convert(&Value::Long(n), &DeclaredType::timestamp(), "t").unwrap(), Value::timestamp(n));
    }
}

// === Choice ===

#[test]
fn test_choice_prefers_first_compatible_candidate() {
    let ty = DeclaredType::choice([DeclaredType::Long, DeclaredType::Double]);
    let value = Value::string("42");

    assert_eq!(choose_candidate(&value, &ty), Some(&DeclaredType::Long));
    assert_eq!(convert(&value, &ty, "c").unwrap(), Value::Long(42));
    assert_eq!(convert(&Value::string("4.2"), &ty, "c").unwrap(), Value::Double(4.2));
}

#[test]
fn test_choice_order_matters() {
    let ty = DeclaredType::choice([DeclaredType::string(), DeclaredType::Long]);
    assert_eq!(convert(&Value::Long(1), &ty, "c").unwrap(), Value::string("1"));
}

#[test]
fn test_nested_choice() {
    let inner = DeclaredType::choice([DeclaredType::Boolean, DeclaredType::Int]);
    let ty = DeclaredType::choice([DeclaredType::Char, inner.clone()]);
    assert_eq!(choose_candidate(&Value::Int(3), &ty), Some(&inner));
    assert_eq!(convert(&Value::Int(3), &ty, "c").unwrap(), Value::Int(3));
}

// === Boolean ===

#[rstest]
#[case("true", true)]
#[case("True", true)]
#[case("tRuE", true)]
#[case("FALSE", false)]
fn test_boolean_text_ignores_case(#[case] text: &str, #[case] expected: bool) {
    let value = Value::string(text);
    assert!(is_compatible(&value, &DeclaredType::Boolean));
    assert_eq!(convert(&value, &DeclaredType::Boolean, "b").unwrap(), Value::Boolean(expected));
}

// === Temporal text ===

#[rstest]
#[case(DeclaredType::date())]
#[case(DeclaredType::time().with_format(TemporalFormat::new("%H:%M").unwrap()))]
#[case(DeclaredType::timestamp())]
fn test_blank_temporal_text_is_null(#[case] ty: DeclaredType) {
    for text in ["", " ", "\t\n"] {
        assert_eq!(convert(&Value::string(text), &ty, "t").unwrap(), Value::Null);
    }
}

#[test]
fn test_formatless_temporal_text_must_be_numeric() {
    let err = convert(&Value::string("yesterday"), &DeclaredType::date(), "d").unwrap_err();
    assert_eq!(err.reason, ConversionFailure::NotEpochMillis);
    assert!(!is_compatible(&Value::string("yesterday"), &DeclaredType::date()));

    assert_eq!(
        convert(&Value::string("86400000"), &DeclaredType::date(), "d").unwrap(),
        Value::date(86_400_000)
    );
}

#[test]
fn test_configured_formats() {
    let coercer = Coercer::standard().unwrap();
    let value = Value::string("1970-01-02");
    assert!(coercer.is_compatible(&value, &DeclaredType::date()));
    assert_eq!(
        coercer.convert(&value, &DeclaredType::date(), "d").unwrap(),
        Value::date(86_400_000)
    );
    // The global coercer has no default formats
    assert!(!is_compatible(&value, &DeclaredType::date()));
}

#[test]
fn test_offset_in_text_is_honored() {
    let ty = DeclaredType::timestamp()
        .with_format(TemporalFormat::new("%Y-%m-%dT%H:%M:%S%z").unwrap());
    assert_eq!(
        convert(&Value::string("1970-01-01T01:00:00+0100"), &ty, "t").unwrap(),
        Value::timestamp(0)
    );
}

#[rstest]
#[case(DeclaredType::date(), "%Y-%m", "2020-05", Value::date(1_588_291_200_000))]
#[case(DeclaredType::timestamp(), "%Y-%m-%d %H", "2020-05-03 07", Value::timestamp(1_588_489_200_000))]
#[case(DeclaredType::timestamp(), "%s", "86400", Value::timestamp(86_400_000))]
fn test_partial_patterns_keep_parsed_fields(
    #[case] ty: DeclaredType,
    #[case] pattern: &str,
    #[case] text: &str,
    #[case] expected: Value,
) {
    let ty = ty.with_format(TemporalFormat::new(pattern).unwrap());
    assert_eq!(convert(&Value::string(text), &ty, "t").unwrap(), expected);
}

// === Composites ===

#[test]
fn test_record_coercion_drops_unknown_keys() {
    let mut address = ValueMap::new();
    address.insert("city", "Bergen");
    address.insert("zip", "5003");
    address.insert("country", "NO");

    let mut person = ValueMap::new();
    person.insert("id", Value::Int(7));
    person.insert("born", Value::Long(0));
    person.insert("address", Value::Map(address));
    person.insert("nickname", "Bob");

    let converted = convert(&Value::Map(person), &DeclaredType::record(person_schema()), "person").unwrap();
    let record = converted.as_record().unwrap();

    assert_eq!(record.get("id"), &Value::Long(7));
    assert_eq!(record.get("born"), &Value::date(0));
    assert!(!record.contains("nickname"));

    let address = record.get("address").as_record().unwrap();
    assert_eq!(address.get("city"), &Value::string("Bergen"));
    assert_eq!(address.get("zip"), &Value::Int(5003));
    assert!(!address.contains("country"));
}

#[test]
fn test_map_to_record_without_schema_fails() {
    let mut map = ValueMap::new();
    map.insert("city", "Bergen");
    let err = convert(&Value::Map(map), &DeclaredType::schemaless_record(), "r").unwrap_err();
    assert_eq!(err.reason, ConversionFailure::MissingSchema);
}

#[test]
fn test_nested_member_failure_names_full_path() {
    let mut address = ValueMap::new();
    address.insert("zip", "north");
    let mut person = ValueMap::new();
    person.insert("address", Value::Map(address));

    let err = convert(&Value::Map(person), &DeclaredType::record(person_schema()), "person").unwrap_err();
    assert_eq!(err.field, "person.address.zip");
    assert_eq!(err.target, FieldKind::Int);
}

#[test]
fn test_map_never_fails_on_key_type() {
    let mut map = ValueMap::new();
    map.insert(Value::Double(1.0), Value::Int(1));
    map.insert(Value::date(0), Value::Int(2));
    map.insert(Value::Array(vec![Value::Int(1)]), Value::Int(3));

    let converted = convert(&Value::Map(map), &DeclaredType::Map, "m").unwrap();
    let map = converted.as_map().unwrap();
    assert_eq!(map.get("1.0"), Some(&Value::Int(1)));
    assert_eq!(map.get("0"), Some(&Value::Int(2)));
    assert_eq!(map.get("[1]"), Some(&Value::Int(3)));
}

// === BigInt compatibility ===

#[test]
fn test_big_int_accepts_long_and_big_int_values() {
    assert!(is_compatible(&Value::Long(10), &DeclaredType::BigInt));
    assert!(is_compatible(&Value::BigInt(BigInt::from(10)), &DeclaredType::BigInt));
    assert_eq!(
        convert(&Value::Long(10), &DeclaredType::BigInt, "b").unwrap(),
        Value::BigInt(BigInt::from(10))
    );
}
