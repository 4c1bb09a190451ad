//! Compatibility checks
//!
//! A value is compatible with a declared type when [`Coercer::convert`]
//! would produce a value of that type from it. The checks never build the
//! converted value and never fail; a parse failure just means "incompatible".

use fieldcast_types::{DeclaredType, FieldKind, Value};

use crate::coercer::{Coercer, is_native};
use crate::scalar::{Number, parse_boolean, parse_numeric};

impl Coercer {
    /// Check whether a value can be converted to a declared type
    ///
    /// `null` is never compatible with anything.
    pub fn is_compatible(&self, value: &Value, ty: &DeclaredType) -> bool {
        if value.is_null() {
            return false;
        }

        match ty {
            DeclaredType::Boolean => match value {
                Value::Boolean(_) => true,
                Value::String(text) => parse_boolean(text).is_some(),
                _ => false,
            },
            DeclaredType::BigInt => is_big_int_compatible(value),
            DeclaredType::Byte
            | DeclaredType::Short
            | DeclaredType::Int
            | DeclaredType::Long
            | DeclaredType::Float
            | DeclaredType::Double => is_numeric_compatible(value, ty.kind()),
            DeclaredType::Char => match value {
                Value::Char(_) => true,
                Value::String(text) => !text.is_empty(),
                _ => false,
            },
            DeclaredType::String { .. } => true,
            DeclaredType::Date { .. } | DeclaredType::Time { .. } | DeclaredType::Timestamp { .. } => {
                self.is_temporal_compatible(value, ty)
            }
            DeclaredType::Array => matches!(value, Value::Array(_)),
            DeclaredType::Map => matches!(value, Value::Map(_)),
            DeclaredType::Record { .. } => matches!(value, Value::Record(_)),
            DeclaredType::Choice { .. } => self.choose_candidate(value, ty).is_some(),
        }
    }

    /// Pick the candidate of a choice type a value should be converted to
    ///
    /// Candidates are tried in declared order and the first compatible one
    /// wins. Returns `None` for `null`, for non-choice types and when no
    /// candidate accepts the value.
    pub fn choose_candidate<'t>(&self, value: &Value, ty: &'t DeclaredType) -> Option<&'t DeclaredType> {
        let chosen = ty
            .candidates()
            .iter()
            .find(|candidate| self.is_compatible(value, candidate));

        if let Some(candidate) = chosen {
            log::trace!("{} [{}] resolves to {}", value.kind_name(), value, candidate);
        }
        chosen
    }

    fn is_temporal_compatible(&self, value: &Value, ty: &DeclaredType) -> bool {
        match value {
            Value::String(text) => matches!(self.parse_temporal_text(text, ty), Ok(Some(_))),
            other => other.is_temporal() || other.is_numeric(),
        }
    }
}

fn is_numeric_compatible(value: &Value, kind: FieldKind) -> bool {
    match value {
        Value::String(text) => parse_numeric(text, kind).is_some(),
        Value::Date(_) | Value::Time(_) | Value::Timestamp(_) => kind == FieldKind::Long,
        other => other.is_numeric(),
    }
}

/// Every integral value, finite floating values and integer text
fn is_big_int_compatible(value: &Value) -> bool {
    if is_native(value, FieldKind::BigInt) {
        return true;
    }

    match value {
        Value::String(text) => parse_numeric(text, FieldKind::BigInt).is_some(),
        other => Number::of(other).is_some_and(Number::is_finite),
    }
}
