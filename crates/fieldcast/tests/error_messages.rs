//! Snapshot tests for conversion error messages

use fieldcast::{DeclaredType, RecordSchema, TemporalFormat, Value, ValueMap, convert};
use insta::assert_snapshot;
use std::sync::Arc;

fn message(value: Value, ty: &DeclaredType, field: &str) -> String {
    convert(&value, ty, field).unwrap_err().to_string()
}

#[test]
fn snapshot_invalid_literal() {
    assert_snapshot!(
        message(Value::string("12x"), &DeclaredType::Int, "count"),
        @"Cannot convert value [12x] of type String to Int for field count: text is not a valid Int literal"
    );
    assert_snapshot!(
        message(Value::string("yes"), &DeclaredType::Boolean, "active"),
        @"Cannot convert value [yes] of type String to Boolean for field active: text is not a valid Boolean literal"
    );
}

#[test]
fn snapshot_incompatible_kind() {
    assert_snapshot!(
        message(Value::Double(1.0), &DeclaredType::Boolean, "flag"),
        @"Cannot convert value [1.0] of type Double to Boolean for field flag: no conversion exists for this kind of value"
    );
    assert_snapshot!(
        message(Value::Array(vec![Value::Int(1), Value::Int(2)]), &DeclaredType::Map, "tags"),
        @"Cannot convert value [[1, 2]] of type Array to Map for field tags: no conversion exists for this kind of value"
    );
}

#[test]
fn snapshot_temporal_failures() {
    assert_snapshot!(
        message(Value::string("2020-01-01"), &DeclaredType::timestamp(), "ts"),
        @"Cannot convert value [2020-01-01] of type String to Timestamp for field ts: text is not an epoch millisecond value and no format is configured"
    );

    let ty = DeclaredType::date().with_format(TemporalFormat::new("%Y-%m-%d").unwrap());
    assert_snapshot!(
        message(Value::string("01/02/2020"), &ty, "born"),
        @"Cannot convert value [01/02/2020] of type String to Date for field born: text is not in the expected format %Y-%m-%d"
    );
}

#[test]
fn snapshot_empty_char() {
    assert_snapshot!(
        message(Value::string(""), &DeclaredType::Char, "initial"),
        @"Cannot convert value [] of type String to Char for field initial: text has a length of 0"
    );
}

#[test]
fn snapshot_non_finite_big_int() {
    assert_snapshot!(
        message(Value::Double(f64::NAN), &DeclaredType::BigInt, "n"),
        @"Cannot convert value [NaN] of type Double to BigInt for field n: value is not finite"
    );
}

#[test]
fn snapshot_record_failures() {
    let mut map = ValueMap::new();
    map.insert("a", Value::Int(1));
    assert_snapshot!(
        message(Value::Map(map), &DeclaredType::schemaless_record(), "r"),
        @"Cannot convert value [{a=1}] of type Map to Record for field r: the value is a map but no record schema was provided"
    );

    let schema = Arc::new(
        RecordSchema::builder()
            .field("zip", DeclaredType::Int)
            .build()
            .unwrap(),
    );
    let mut map = ValueMap::new();
    map.insert("zip", "north");
    assert_snapshot!(
        message(Value::Map(map), &DeclaredType::record(schema), "address"),
        @"Cannot convert value [north] of type String to Int for field address.zip: text is not a valid Int literal"
    );
}

#[test]
fn snapshot_choice_without_candidate() {
    let format = TemporalFormat::new("%Y-%m-%d").unwrap();
    let ty = DeclaredType::choice([DeclaredType::Long, DeclaredType::date().with_format(format)]);
    assert_snapshot!(
        message(Value::string("soon"), &ty, "when"),
        @"Cannot convert value [soon] of type String to Choice for field when: no choice candidate accepts it, tried [Long, Date:%Y-%m-%d]"
    );
}
