//! Conversion errors

use fieldcast_types::{FieldKind, Value};
use thiserror::Error;

/// Result type for conversions
pub type ConversionResult<T> = Result<T, IllegalTypeConversion>;

/// A value could not be coerced to the declared type of a field
///
/// Every failure is deterministic for a given (value, type) pair, so it is
/// never worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Cannot convert value [{value}] of type {value_kind} to {target} for field {field}: {reason}")]
pub struct IllegalTypeConversion {
    /// Display rendering of the offending value
    pub value: String,
    /// Runtime kind of the offending value
    pub value_kind: &'static str,
    /// Kind the value was being coerced to
    pub target: FieldKind,
    /// Field (or nested path) being converted
    pub field: String,
    pub reason: ConversionFailure,
}

/// Why a conversion failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionFailure {
    /// The runtime kind has no conversion path to the target
    #[error("no conversion exists for this kind of value")]
    Incompatible,

    /// Text is not a literal of the target kind
    #[error("text is not a valid {kind} literal")]
    InvalidLiteral { kind: FieldKind },

    /// Temporal text without a format must be epoch milliseconds
    #[error("text is not an epoch millisecond value and no format is configured")]
    NotEpochMillis,

    /// Temporal text did not match the effective format
    #[error("text is not in the expected format {pattern}")]
    FormatMismatch { pattern: String },

    /// A character cannot be taken from empty text
    #[error("text has a length of 0")]
    EmptyText,

    /// NaN or infinite values have no integer representation
    #[error("value is not finite")]
    NonFinite,

    /// A map cannot become a record without a schema
    #[error("the value is a map but no record schema was provided")]
    MissingSchema,

    /// No candidate of a choice accepted the value
    #[error("no choice candidate accepts it, tried [{}]", .candidates.join(", "))]
    NoMatchingCandidate { candidates: Vec<String> },
}

impl IllegalTypeConversion {
    /// Create a conversion error for a value
    pub fn new(
        value: &Value,
        target: FieldKind,
        field: impl Into<String>,
        reason: ConversionFailure,
    ) -> Self {
        Self {
            value: value.to_string(),
            value_kind: value.kind_name(),
            target,
            field: field.into(),
            reason,
        }
    }

    /// Create an error for a value with no conversion path
    pub fn incompatible(value: &Value, target: FieldKind, field: impl Into<String>) -> Self {
        Self::new(value, target, field, ConversionFailure::Incompatible)
    }
}
