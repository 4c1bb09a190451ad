//! UTC temporal formats and instants
//!
//! Every parse and render here happens in UTC. The host time zone never
//! participates, so the same text always maps to the same instant.

use chrono::format::{Item, ParseErrorKind, Parsed, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{SchemaError, SchemaResult};

/// A point in time, stored as milliseconds since the Unix epoch (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(i64);

impl Instant {
    /// Create an instant from epoch milliseconds
    pub const fn from_epoch_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the Unix epoch
    pub const fn epoch_millis(&self) -> i64 {
        self.0
    }

    /// Convert to a chrono UTC date-time, if representable
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.timestamp_millis())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}", self.0),
        }
    }
}

/// A strftime pattern used to parse and render temporal text in UTC
///
/// Fields missing from the pattern take their epoch defaults: a time-only
/// pattern lands on 1970-01-01 and a date-only pattern lands on midnight.
/// An explicit `%z` offset in the text is honored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TemporalFormat {
    pattern: String,
}

impl TemporalFormat {
    /// Compile a pattern, rejecting unknown specifiers
    pub fn new(pattern: impl Into<String>) -> SchemaResult<Self> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(SchemaError::invalid_format(pattern));
        }
        Ok(Self { pattern })
    }

    /// The source pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse text into epoch milliseconds
    ///
    /// Only the fields the pattern leaves out are defaulted; a `%s` epoch
    /// timestamp stands on its own.
    pub fn parse_millis(&self, text: &str) -> Result<i64, chrono::ParseError> {
        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, text, StrftimeItems::new(&self.pattern))?;

        let offset = parsed.to_fixed_offset().map_or(0, |offset| offset.local_minus_utc());
        let local = match parsed.to_naive_datetime_with_offset(offset) {
            Ok(local) => local,
            Err(e) if e.kind() == ParseErrorKind::NotEnough => {
                fill_missing_fields(&mut parsed);
                parsed.to_naive_datetime_with_offset(offset)?
            }
            Err(e) => return Err(e),
        };

        Ok(local.and_utc().timestamp_millis() - i64::from(offset) * 1000)
    }

    /// Render epoch milliseconds, or `None` when out of chrono's range
    pub fn format_millis(&self, millis: i64) -> Option<String> {
        let dt = DateTime::from_timestamp_millis(millis)?;
        Some(dt.format(&self.pattern).to_string())
    }
}

/// Default the date fields to 1970-01-01 and the time fields to midnight
///
/// Setters refuse to overwrite a field that was parsed, so only absent
/// fields take their default.
fn fill_missing_fields(parsed: &mut Parsed) {
    if parsed.to_naive_date().is_err_and(|e| e.kind() == ParseErrorKind::NotEnough) {
        let _ = parsed.set_year(1970);
        let _ = parsed.set_month(1);
        let _ = parsed.set_day(1);
    }
    if parsed.to_naive_time().is_err_and(|e| e.kind() == ParseErrorKind::NotEnough) {
        let _ = parsed.set_hour(0);
        let _ = parsed.set_minute(0);
        let _ = parsed.set_second(0);
    }
}

impl TryFrom<String> for TemporalFormat {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TemporalFormat> for String {
    fn from(value: TemporalFormat) -> Self {
        value.pattern
    }
}

impl fmt::Display for TemporalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
