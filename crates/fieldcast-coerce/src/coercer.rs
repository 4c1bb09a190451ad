//! The coercer
//!
//! `Coercer` is the entry point for both compatibility checks and
//! conversions. Its behavior is spread over several modules, each adding an
//! `impl Coercer` block:
//! - `compat` - compatibility probes and choice resolution
//! - `scalar` - boolean, numeric and character conversions
//! - `temporal` - date, time, timestamp and text conversions
//! - `composite` - array, map, record and choice conversions

use fieldcast_types::{DeclaredType, FieldKind, SchemaResult, Value};

use crate::config::CoercionConfig;
use crate::error::ConversionResult;

static DEFAULT_COERCER: Coercer = Coercer::new();

/// Converts runtime values to declared types
///
/// A coercer holds only its immutable configuration, so one instance can
/// serve any number of threads at once.
#[derive(Debug, Clone, Default)]
pub struct Coercer {
    pub(crate) config: CoercionConfig,
}

impl Coercer {
    /// Create a coercer without default temporal formats
    pub const fn new() -> Self {
        Self {
            config: CoercionConfig::new(),
        }
    }

    /// Create a coercer with the given configuration
    pub fn with_config(config: CoercionConfig) -> Self {
        Self { config }
    }

    /// Create a coercer using the standard temporal formats
    pub fn standard() -> SchemaResult<Self> {
        Ok(Self::with_config(CoercionConfig::standard()?))
    }

    /// The shared default coercer
    pub fn global() -> &'static Coercer {
        &DEFAULT_COERCER
    }

    pub fn config(&self) -> &CoercionConfig {
        &self.config
    }

    /// Convert a value to a declared type
    ///
    /// `null` converts to `null` for every type. `field` names the field
    /// being converted and is carried into any error.
    pub fn convert(&self, value: &Value, ty: &DeclaredType, field: &str) -> ConversionResult<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        let result = match ty {
            DeclaredType::Boolean => self.to_boolean(value, field),
            DeclaredType::Byte
            | DeclaredType::Short
            | DeclaredType::Int
            | DeclaredType::Long
            | DeclaredType::BigInt
            | DeclaredType::Float
            | DeclaredType::Double => self.to_numeric(value, ty.kind(), field),
            DeclaredType::Char => self.to_char(value, field),
            DeclaredType::String { format } => Ok(self.to_text(value, format.as_ref())),
            DeclaredType::Date { .. } => self.to_temporal(value, ty, Value::Date, field),
            DeclaredType::Time { .. } => self.to_temporal(value, ty, Value::Time, field),
            DeclaredType::Timestamp { .. } => self.to_temporal(value, ty, Value::Timestamp, field),
            DeclaredType::Array => self.to_array(value, field),
            DeclaredType::Map => self.to_map(value, field),
            DeclaredType::Record { schema } => self.to_record(value, schema.as_ref(), field),
            DeclaredType::Choice { .. } => self.to_choice(value, ty, field),
        };

        if let Err(err) = &result {
            log::debug!("{}", err);
        }
        result
    }
}

/// Check whether a value already has the runtime representation of a kind
pub(crate) fn is_native(value: &Value, kind: FieldKind) -> bool {
    matches!(
        (value, kind),
        (Value::Boolean(_), FieldKind::Boolean)
            | (Value::Byte(_), FieldKind::Byte)
            | (Value::Short(_), FieldKind::Short)
            | (Value::Int(_), FieldKind::Int)
            | (Value::Long(_), FieldKind::Long)
            | (Value::BigInt(_), FieldKind::BigInt)
            | (Value::Float(_), FieldKind::Float)
            | (Value::Double(_), FieldKind::Double)
            | (Value::Char(_), FieldKind::Char)
            | (Value::String(_), FieldKind::String)
            | (Value::Date(_), FieldKind::Date)
            | (Value::Time(_), FieldKind::Time)
            | (Value::Timestamp(_), FieldKind::Timestamp)
            | (Value::Array(_), FieldKind::Array)
            | (Value::Record(_), FieldKind::Record)
    )
}

/// Path of a record member, for diagnostics
pub(crate) fn member_path(field: &str, member: &str) -> String {
    if field.is_empty() {
        member.to_string()
    } else {
        format!("{}.{}", field, member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_null_converts_to_null_for_every_kind() {
        let coercer = Coercer::new();
        for kind in FieldKind::ALL {
            let ty = DeclaredType::from(kind);
            assert_eq!(coercer.convert(&Value::Null, &ty, "f").unwrap(), Value::Null);
        }
    }

    #[test]
    fn test_native_values_are_returned_unchanged() {
        let coercer = Coercer::new();
        let cases = [
            (Value::Boolean(true), DeclaredType::Boolean),
            (Value::Byte(-3), DeclaredType::Byte),
            (Value::Short(300), DeclaredType::Short),
            (Value::Int(70_000), DeclaredType::Int),
            (Value::Long(1 << 40), DeclaredType::Long),
            (Value::BigInt(BigInt::from(u64::MAX) * 3u32), DeclaredType::BigInt),
            (Value::Float(1.5), DeclaredType::Float),
            (Value::Double(-2.25), DeclaredType::Double),
            (Value::Char('x'), DeclaredType::Char),
            (Value::string("hello"), DeclaredType::string()),
            (Value::date(86_400_000), DeclaredType::date()),
            (Value::time(1_000), DeclaredType::time()),
            (Value::timestamp(123), DeclaredType::timestamp()),
        ];

        for (value, ty) in cases {
            assert_eq!(coercer.convert(&value, &ty, "f").unwrap(), value, "{}", ty);
        }
    }

    #[test]
    fn test_global_coercer_has_no_formats() {
        assert_eq!(Coercer::global().config(), &CoercionConfig::new());
    }

    #[test]
    fn test_member_path() {
        assert_eq!(member_path("", "a"), "a");
        assert_eq!(member_path("outer", "a"), "outer.a");
    }
}
