//! Date, time, timestamp and text conversions

use fieldcast_types::{DeclaredType, Instant, TemporalFormat, Value};

use crate::coercer::Coercer;
use crate::error::{ConversionFailure, ConversionResult, IllegalTypeConversion};
use crate::scalar::Number;

impl Coercer {
    /// Convert to a temporal kind
    ///
    /// `make` wraps the resulting instant in the target's value variant.
    pub(crate) fn to_temporal(
        &self,
        value: &Value,
        ty: &DeclaredType,
        make: fn(Instant) -> Value,
        field: &str,
    ) -> ConversionResult<Value> {
        if let Some(instant) = value.as_instant() {
            return Ok(make(instant));
        }

        if let Some(number) = Number::of(value) {
            return Ok(make(Instant::from_epoch_millis(number.to_i64())));
        }

        match value {
            Value::String(text) => match self.parse_temporal_text(text, ty) {
                Ok(Some(instant)) => Ok(make(instant)),
                Ok(None) => Ok(Value::Null),
                Err(reason) => Err(IllegalTypeConversion::new(value, ty.kind(), field, reason)),
            },
            _ => Err(IllegalTypeConversion::incompatible(value, ty.kind(), field)),
        }
    }

    /// Parse temporal text against the effective format of `ty`
    ///
    /// Blank text is absent rather than malformed and yields `Ok(None)`.
    /// Without a format only plain epoch milliseconds are accepted; no
    /// attempt is made to guess a date layout.
    pub(crate) fn parse_temporal_text(
        &self,
        text: &str,
        ty: &DeclaredType,
    ) -> Result<Option<Instant>, ConversionFailure> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        match self.config.effective_format(ty) {
            None => text
                .parse::<i64>()
                .map(|millis| Some(Instant::from_epoch_millis(millis)))
                .map_err(|_| ConversionFailure::NotEpochMillis),
            Some(format) => format
                .parse_millis(text)
                .map(|millis| Some(Instant::from_epoch_millis(millis)))
                .map_err(|_| ConversionFailure::FormatMismatch {
                    pattern: format.pattern().to_string(),
                }),
        }
    }

    /// Convert to String; every non-null value has a text rendering
    pub(crate) fn to_text(&self, value: &Value, format: Option<&TemporalFormat>) -> Value {
        match value {
            Value::String(_) => value.clone(),
            other => render_text(other, format).map_or(Value::Null, Value::String),
        }
    }
}

/// Render a value as text
///
/// Temporal values use `format` when given and fall back to epoch
/// milliseconds otherwise (or when the instant is outside the formattable
/// range). Arrays render as `[a, b]`; everything else uses its natural
/// rendering. `null` has no rendering.
pub fn render_text(value: &Value, format: Option<&TemporalFormat>) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Date(instant) | Value::Time(instant) | Value::Timestamp(instant) => {
            let millis = instant.epoch_millis();
            let formatted = format.and_then(|format| format.format_millis(millis));
            Some(formatted.unwrap_or_else(|| millis.to_string()))
        }
        other => Some(other.to_string()),
    }
}
