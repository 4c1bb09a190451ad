//! Runtime values
//!
//! This module defines the `Value` enum, the tagged union every external
//! value is resolved into before it reaches the coercer, together with the
//! composite containers it nests: [`ValueMap`] and [`Record`].

use indexmap::{Equivalent, IndexMap};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::sync::Arc;

use crate::{Instant, RecordSchema};

/// A runtime value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    // === Primitive Types ===
    /// Absent value
    Null,
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    /// Unbounded integer
    BigInt(BigInt),
    Float(f32),
    Double(f64),
    Char(char),
    String(String),

    // === Temporal Types ===
    Date(Instant),
    Time(Instant),
    Timestamp(Instant),

    // === Composite Types ===
    /// Ordered sequence of arbitrary values
    Array(Vec<Value>),
    /// Mapping with arbitrary keys
    Map(ValueMap),
    /// Name to value mapping bound to a schema
    Record(Record),
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value is any numeric kind
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Byte(_)
                | Self::Short(_)
                | Self::Int(_)
                | Self::Long(_)
                | Self::BigInt(_)
                | Self::Float(_)
                | Self::Double(_)
        )
    }

    /// Check if this value is a date, time or timestamp
    pub fn is_temporal(&self) -> bool {
        self.as_instant().is_some()
    }

    /// Name of the runtime kind, for diagnostics
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Byte(_) => "Byte",
            Self::Short(_) => "Short",
            Self::Int(_) => "Int",
            Self::Long(_) => "Long",
            Self::BigInt(_) => "BigInt",
            Self::Float(_) => "Float",
            Self::Double(_) => "Double",
            Self::Char(_) => "Char",
            Self::String(_) => "String",
            Self::Date(_) => "Date",
            Self::Time(_) => "Time",
            Self::Timestamp(_) => "Timestamp",
            Self::Array(_) => "Array",
            Self::Map(_) => "Map",
            Self::Record(_) => "Record",
        }
    }

    /// Try to get as Boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the instant of a temporal value
    pub fn as_instant(&self) -> Option<Instant> {
        match self {
            Self::Date(i) | Self::Time(i) | Self::Timestamp(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a date from epoch milliseconds
    pub fn date(millis: i64) -> Self {
        Self::Date(Instant::from_epoch_millis(millis))
    }

    /// Create a time from epoch milliseconds
    pub fn time(millis: i64) -> Self {
        Self::Time(Instant::from_epoch_millis(millis))
    }

    /// Create a timestamp from epoch milliseconds
    pub fn timestamp(millis: i64) -> Self {
        Self::Timestamp(Instant::from_epoch_millis(millis))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Byte(v) => write!(f, "{}", v),
            Self::Short(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Long(v) => write!(f, "{}", v),
            Self::BigInt(v) => write!(f, "{}", v),
            Self::Float(v) => write_floating(f, *v, f64::from(*v)),
            Self::Double(v) => write_floating(f, *v, *v),
            Self::Char(c) => write!(f, "{}", c),
            Self::String(s) => f.write_str(s),
            Self::Date(i) | Self::Time(i) | Self::Timestamp(i) => write!(f, "{}", i),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Map(map) => write!(f, "{}", map),
            Self::Record(record) => write!(f, "{}", record),
        }
    }
}

/// Floating values always show a fractional part
///
/// Magnitudes outside `[1e-3, 1e7)` use scientific notation (`1.0E20`) and
/// infinities render as `Infinity`, the same spellings text parsing accepts.
fn write_floating<T>(f: &mut fmt::Formatter<'_>, value: T, magnitude: f64) -> fmt::Result
where
    T: fmt::Display + fmt::LowerExp,
{
    if magnitude.is_nan() {
        return f.write_str("NaN");
    }
    if magnitude.is_infinite() {
        return f.write_str(if magnitude > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let abs = magnitude.abs();
    if abs != 0.0 && !(1e-3..1e7).contains(&abs) {
        let text = format!("{:e}", value);
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let point = if mantissa.contains('.') { "" } else { ".0" };
        write!(f, "{}{}E{}", mantissa, point, exponent)
    } else {
        let text = value.to_string();
        let point = if text.contains('.') { "" } else { ".0" };
        write!(f, "{}{}", text, point)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Self::Byte(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Self::Short(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Self::Map(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// Maps
// ============================================================================

/// Insertion-ordered mapping with arbitrary keys
///
/// Inserting a key equal to an existing one replaces its value in place.
/// Keys compare structurally, with floating keys compared by bit pattern, so
/// a `NaN` key can be replaced like any other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(Value, Value)>", into = "Vec<(Value, Value)>")]
pub struct ValueMap {
    entries: IndexMap<MapKey, Value>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert an entry, returning the replaced value
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(MapKey(key.into()), value.into())
    }

    /// Look up the value under a text key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(&TextKey(key))
    }

    /// Look up the value under any key
    pub fn get_value(&self, key: &Value) -> Option<&Value> {
        self.entries.get(&KeyRef(key))
    }

    /// Check whether every key is text
    pub fn has_text_keys(&self) -> bool {
        self.entries.keys().all(|k| matches!(k.0, Value::String(_)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (&k.0, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl From<Vec<(Value, Value)>> for ValueMap {
    fn from(entries: Vec<(Value, Value)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<ValueMap> for Vec<(Value, Value)> {
    fn from(map: ValueMap) -> Self {
        map.entries.into_iter().map(|(k, v)| (k.0, v)).collect()
    }
}

impl fmt::Display for ValueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        write!(f, "}}")
    }
}

/// A map key with hashing and equality defined over the whole value
#[derive(Debug, Clone)]
struct MapKey(Value);

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        key_eq(&self.0, &other.0)
    }
}

impl Eq for MapKey {}

impl Hash for MapKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_key(&self.0, state);
    }
}

/// Borrowed lookup key
struct KeyRef<'a>(&'a Value);

impl Hash for KeyRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_key(self.0, state);
    }
}

impl Equivalent<MapKey> for KeyRef<'_> {
    fn equivalent(&self, key: &MapKey) -> bool {
        key_eq(self.0, &key.0)
    }
}

/// Borrowed text lookup key; hashes exactly like `Value::String`
struct TextKey<'a>(&'a str);

impl Hash for TextKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(&Value::String(String::new())).hash(state);
        self.0.hash(state);
    }
}

impl Equivalent<MapKey> for TextKey<'_> {
    fn equivalent(&self, key: &MapKey) -> bool {
        key.0.as_str() == Some(self.0)
    }
}

fn hash_key<H: Hasher>(value: &Value, state: &mut H) {
    mem::discriminant(value).hash(state);
    match value {
        Value::Null => {}
        Value::Boolean(b) => b.hash(state),
        Value::Byte(v) => v.hash(state),
        Value::Short(v) => v.hash(state),
        Value::Int(v) => v.hash(state),
        Value::Long(v) => v.hash(state),
        Value::BigInt(v) => v.hash(state),
        Value::Float(v) => v.to_bits().hash(state),
        Value::Double(v) => v.to_bits().hash(state),
        Value::Char(c) => c.hash(state),
        Value::String(s) => s.hash(state),
        Value::Date(i) | Value::Time(i) | Value::Timestamp(i) => i.hash(state),
        Value::Array(items) => {
            items.len().hash(state);
            for item in items {
                hash_key(item, state);
            }
        }
        Value::Map(map) => {
            map.len().hash(state);
            for (k, v) in map.iter() {
                hash_key(k, state);
                hash_key(v, state);
            }
        }
        Value::Record(record) => {
            record.len().hash(state);
            for (name, v) in record.values() {
                name.hash(state);
                hash_key(v, state);
            }
        }
    }
}

/// Key equality; agrees with [`hash_key`]
fn key_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Float(x), Value::Float(y)) => x.to_bits() == y.to_bits(),
        (Value::Double(x), Value::Double(y)) => x.to_bits() == y.to_bits(),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| key_eq(x, y))
        }
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .zip(y.iter())
                    .all(|((kx, vx), (ky, vy))| key_eq(kx, ky) && key_eq(vx, vy))
        }
        (Value::Record(x), Value::Record(y)) => {
            x.len() == y.len()
                && x
                    .values()
                    .iter()
                    .zip(y.values())
                    .all(|((nx, vx), (ny, vy))| nx == ny && key_eq(vx, vy))
        }
        _ => a == b,
    }
}

// ============================================================================
// Records
// ============================================================================

/// A name to value mapping bound to a schema
///
/// Fields the schema declares but the record does not hold read as `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    schema: Arc<RecordSchema>,
    values: IndexMap<String, Value>,
}

impl Record {
    /// Build a record against a schema
    pub fn new(schema: impl Into<Arc<RecordSchema>>, values: IndexMap<String, Value>) -> Self {
        Self {
            schema: schema.into(),
            values,
        }
    }

    /// Build a record from (name, value) pairs
    pub fn from_values(
        schema: impl Into<Arc<RecordSchema>>,
        values: impl IntoIterator<Item = (impl Into<String>, Value)>,
    ) -> Self {
        Self::new(
            schema,
            values.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        )
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Shared handle to the schema
    pub fn schema_arc(&self) -> &Arc<RecordSchema> {
        &self.schema
    }

    /// Value of a field, `Null` when absent
    pub fn get(&self, name: &str) -> &Value {
        const NULL: &Value = &Value::Null;
        self.values.get(name).unwrap_or(NULL)
    }

    /// Check whether the record holds an entry for a field
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Stored entries, in insertion order
    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record{{")?;
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, "}}")
    }
}
