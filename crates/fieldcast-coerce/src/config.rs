//! Coercer configuration

use fieldcast_types::{DeclaredType, FieldKind, SchemaResult, TemporalFormat};
use serde::{Deserialize, Serialize};

/// Default temporal formats used when a declared type carries none
///
/// The default configuration has no formats, so format-less temporal text
/// must be epoch milliseconds. [`CoercionConfig::standard`] fills in the
/// standard UTC patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoercionConfig {
    pub date_format: Option<TemporalFormat>,
    pub time_format: Option<TemporalFormat>,
    pub timestamp_format: Option<TemporalFormat>,
}

impl CoercionConfig {
    /// Configuration without default formats
    pub const fn new() -> Self {
        Self {
            date_format: None,
            time_format: None,
            timestamp_format: None,
        }
    }

    /// Configuration using [`FieldKind::default_format`] for every temporal kind
    pub fn standard() -> SchemaResult<Self> {
        let format_for = |kind: FieldKind| {
            kind.default_format()
                .map(TemporalFormat::new)
                .transpose()
        };
        Ok(Self {
            date_format: format_for(FieldKind::Date)?,
            time_format: format_for(FieldKind::Time)?,
            timestamp_format: format_for(FieldKind::Timestamp)?,
        })
    }

    /// Load from JSON such as `{"date_format": "%d/%m/%Y"}`
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn with_date_format(mut self, format: TemporalFormat) -> Self {
        self.date_format = Some(format);
        self
    }

    pub fn with_time_format(mut self, format: TemporalFormat) -> Self {
        self.time_format = Some(format);
        self
    }

    pub fn with_timestamp_format(mut self, format: TemporalFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Default format for a temporal kind
    pub fn default_format(&self, kind: FieldKind) -> Option<&TemporalFormat> {
        match kind {
            FieldKind::Date => self.date_format.as_ref(),
            FieldKind::Time => self.time_format.as_ref(),
            FieldKind::Timestamp => self.timestamp_format.as_ref(),
            _ => None,
        }
    }

    /// Format actually used for a temporal type: its own, else the default
    pub fn effective_format<'a>(&'a self, ty: &'a DeclaredType) -> Option<&'a TemporalFormat> {
        ty.format().or_else(|| self.default_format(ty.kind()))
    }
}
