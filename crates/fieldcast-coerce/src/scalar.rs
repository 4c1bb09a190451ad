//! Boolean, numeric and character conversions
//!
//! Numeric narrowing follows Rust `as` semantics: integers wrap, floats
//! truncate toward zero and saturate at the target's bounds (NaN becomes 0).
//! Unbounded integers keep their low 64 bits before narrowing further.

use fieldcast_types::{FieldKind, Value};
use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, ToPrimitive};
use std::str::FromStr;

use crate::coercer::{Coercer, is_native};
use crate::error::{ConversionFailure, ConversionResult, IllegalTypeConversion};

impl Coercer {
    /// Convert to Boolean
    pub(crate) fn to_boolean(&self, value: &Value, field: &str) -> ConversionResult<Value> {
        match value {
            Value::Boolean(_) => Ok(value.clone()),
            Value::String(text) => parse_boolean(text).map(Value::Boolean).ok_or_else(|| {
                IllegalTypeConversion::new(
                    value,
                    FieldKind::Boolean,
                    field,
                    ConversionFailure::InvalidLiteral {
                        kind: FieldKind::Boolean,
                    },
                )
            }),
            _ => Err(IllegalTypeConversion::incompatible(value, FieldKind::Boolean, field)),
        }
    }

    /// Convert to Char
    pub(crate) fn to_char(&self, value: &Value, field: &str) -> ConversionResult<Value> {
        match value {
            Value::Char(_) => Ok(value.clone()),
            Value::String(text) => text.chars().next().map(Value::Char).ok_or_else(|| {
                IllegalTypeConversion::new(
                    value,
                    FieldKind::Char,
                    field,
                    ConversionFailure::EmptyText,
                )
            }),
            _ => Err(IllegalTypeConversion::incompatible(value, FieldKind::Char, field)),
        }
    }

    /// Convert to one of the numeric kinds
    pub(crate) fn to_numeric(
        &self,
        value: &Value,
        kind: FieldKind,
        field: &str,
    ) -> ConversionResult<Value> {
        if is_native(value, kind) {
            return Ok(value.clone());
        }

        if let Value::String(text) = value {
            return parse_numeric(text, kind).ok_or_else(|| {
                IllegalTypeConversion::new(
                    value,
                    kind,
                    field,
                    ConversionFailure::InvalidLiteral { kind },
                )
            });
        }

        // Temporal values are epoch milliseconds as far as Long is concerned
        if kind == FieldKind::Long {
            if let Some(instant) = value.as_instant() {
                return Ok(Value::Long(instant.epoch_millis()));
            }
        }

        let Some(number) = Number::of(value) else {
            return Err(IllegalTypeConversion::incompatible(value, kind, field));
        };

        let converted = match kind {
            FieldKind::Byte => Value::Byte(number.cast(|i| i as i8, |f| f as i8)),
            FieldKind::Short => Value::Short(number.cast(|i| i as i16, |f| f as i16)),
            FieldKind::Int => Value::Int(number.cast(|i| i as i32, |f| f as i32)),
            FieldKind::Long => Value::Long(number.to_i64()),
            FieldKind::BigInt => match number.to_big_int() {
                Some(big) => Value::BigInt(big),
                None => {
                    return Err(IllegalTypeConversion::new(
                        value,
                        kind,
                        field,
                        ConversionFailure::NonFinite,
                    ));
                }
            },
            FieldKind::Float => Value::Float(number.to_f32()),
            FieldKind::Double => Value::Double(number.to_f64()),
            other => return Err(IllegalTypeConversion::incompatible(value, other, field)),
        };
        Ok(converted)
    }
}

/// Parse "true"/"false", ignoring case
pub(crate) fn parse_boolean(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parse text under the literal grammar of a numeric kind
///
/// Integer kinds accept an optional sign followed by ASCII digits and reject
/// anything outside their range. Floating kinds ignore surrounding
/// whitespace; the only non-numeric spellings they accept are `NaN` and
/// `Infinity`.
pub(crate) fn parse_numeric(text: &str, kind: FieldKind) -> Option<Value> {
    match kind {
        FieldKind::Byte => text.parse().ok().map(Value::Byte),
        FieldKind::Short => text.parse().ok().map(Value::Short),
        FieldKind::Int => text.parse().ok().map(Value::Int),
        FieldKind::Long => text.parse().ok().map(Value::Long),
        FieldKind::BigInt if is_integer_literal(text) => {
            BigInt::from_str(text).ok().map(Value::BigInt)
        }
        FieldKind::Float => parse_floating(text).map(Value::Float),
        FieldKind::Double => parse_floating(text).map(Value::Double),
        _ => None,
    }
}

/// `[+-]?[0-9]+`
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_floating<T: FromStr>(text: &str) -> Option<T> {
    let text = text.trim();
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let named = unsigned.starts_with(|c: char| c.is_ascii_alphabetic());
    if named && unsigned != "NaN" && unsigned != "Infinity" {
        return None;
    }
    text.parse().ok()
}

/// Numeric view over the numeric runtime kinds
#[derive(Debug, Clone, Copy)]
pub(crate) enum Number<'a> {
    Integral(i64),
    Big(&'a BigInt),
    Floating(f64),
}

impl<'a> Number<'a> {
    pub(crate) fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Byte(v) => Some(Self::Integral(i64::from(*v))),
            Value::Short(v) => Some(Self::Integral(i64::from(*v))),
            Value::Int(v) => Some(Self::Integral(i64::from(*v))),
            Value::Long(v) => Some(Self::Integral(*v)),
            Value::BigInt(v) => Some(Self::Big(v)),
            Value::Float(v) => Some(Self::Floating(f64::from(*v))),
            Value::Double(v) => Some(Self::Floating(*v)),
            _ => None,
        }
    }

    fn cast<T>(self, from_int: impl Fn(i64) -> T, from_float: impl Fn(f64) -> T) -> T {
        match self {
            Self::Integral(i) => from_int(i),
            Self::Big(b) => from_int(low_bits(b)),
            Self::Floating(f) => from_float(f),
        }
    }

    pub(crate) fn to_i64(self) -> i64 {
        self.cast(|i| i, |f| f as i64)
    }

    fn to_f32(self) -> f32 {
        match self {
            Self::Integral(i) => i as f32,
            Self::Big(b) => b.to_f32().unwrap_or(f32::NAN),
            Self::Floating(f) => f as f32,
        }
    }

    fn to_f64(self) -> f64 {
        match self {
            Self::Integral(i) => i as f64,
            Self::Big(b) => b.to_f64().unwrap_or(f64::NAN),
            Self::Floating(f) => f,
        }
    }

    /// `None` for NaN and infinities
    fn to_big_int(self) -> Option<BigInt> {
        match self {
            Self::Integral(i) => Some(BigInt::from(i)),
            Self::Big(b) => Some(b.clone()),
            Self::Floating(f) => BigInt::from_f64(f),
        }
    }

    pub(crate) fn is_finite(self) -> bool {
        match self {
            Self::Floating(f) => f.is_finite(),
            Self::Integral(_) | Self::Big(_) => true,
        }
    }
}

/// Low 64 bits of a big integer in two's complement
fn low_bits(value: &BigInt) -> i64 {
    let magnitude = value.iter_u64_digits().next().unwrap_or(0);
    let bits = if value.sign() == Sign::Minus {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    bits as i64
}
