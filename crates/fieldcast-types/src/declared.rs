//! Declared field types
//!
//! A `DeclaredType` is a [`FieldKind`] plus whatever the kind needs to be
//! fully described:
//! - temporal kinds and String carry an optional [`TemporalFormat`]
//! - Record carries its child schema
//! - Choice carries its ordered candidate list

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::{FieldKind, RecordSchema, TemporalFormat};

/// The schema-asserted target type of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DeclaredType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    BigInt,
    Float,
    Double,
    Char,
    /// Text; the format is used to render temporal values
    String { format: Option<TemporalFormat> },
    Date { format: Option<TemporalFormat> },
    Time { format: Option<TemporalFormat> },
    Timestamp { format: Option<TemporalFormat> },
    Array,
    Map,
    /// Nested record; coercing a map requires the child schema
    Record { schema: Option<Arc<RecordSchema>> },
    /// Union type resolved by first compatible candidate; an empty list
    /// rejects every non-null value
    Choice { candidates: Vec<DeclaredType> },
}

impl DeclaredType {
    // === Constructors ===

    /// Text type without a temporal format
    pub fn string() -> Self {
        Self::String { format: None }
    }

    /// Date type without a format
    pub fn date() -> Self {
        Self::Date { format: None }
    }

    /// Time type without a format
    pub fn time() -> Self {
        Self::Time { format: None }
    }

    /// Timestamp type without a format
    pub fn timestamp() -> Self {
        Self::Timestamp { format: None }
    }

    /// Record type bound to a child schema
    pub fn record(schema: impl Into<Arc<RecordSchema>>) -> Self {
        Self::Record {
            schema: Some(schema.into()),
        }
    }

    /// Record type without a child schema
    pub fn schemaless_record() -> Self {
        Self::Record { schema: None }
    }

    /// Choice type over ordered candidates
    ///
    /// A choice without candidates accepts no value other than `null`.
    pub fn choice(candidates: impl IntoIterator<Item = DeclaredType>) -> Self {
        Self::Choice {
            candidates: candidates.into_iter().collect(),
        }
    }

    /// Attach a temporal format
    ///
    /// Only String, Date, Time and Timestamp carry a format; other types are
    /// returned unchanged.
    pub fn with_format(self, format: TemporalFormat) -> Self {
        match self {
            Self::String { .. } => Self::String {
                format: Some(format),
            },
            Self::Date { .. } => Self::Date {
                format: Some(format),
            },
            Self::Time { .. } => Self::Time {
                format: Some(format),
            },
            Self::Timestamp { .. } => Self::Timestamp {
                format: Some(format),
            },
            other => other,
        }
    }

    // === Structural access ===

    /// The field kind of this type
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Boolean => FieldKind::Boolean,
            Self::Byte => FieldKind::Byte,
            Self::Short => FieldKind::Short,
            Self::Int => FieldKind::Int,
            Self::Long => FieldKind::Long,
            Self::BigInt => FieldKind::BigInt,
            Self::Float => FieldKind::Float,
            Self::Double => FieldKind::Double,
            Self::Char => FieldKind::Char,
            Self::String { .. } => FieldKind::String,
            Self::Date { .. } => FieldKind::Date,
            Self::Time { .. } => FieldKind::Time,
            Self::Timestamp { .. } => FieldKind::Timestamp,
            Self::Array => FieldKind::Array,
            Self::Map => FieldKind::Map,
            Self::Record { .. } => FieldKind::Record,
            Self::Choice { .. } => FieldKind::Choice,
        }
    }

    /// The configured temporal format, if any
    pub fn format(&self) -> Option<&TemporalFormat> {
        match self {
            Self::String { format }
            | Self::Date { format }
            | Self::Time { format }
            | Self::Timestamp { format } => format.as_ref(),
            _ => None,
        }
    }

    /// Child schema for Record types
    pub fn child_schema(&self) -> Option<&RecordSchema> {
        match self {
            Self::Record { schema } => schema.as_deref(),
            _ => None,
        }
    }

    /// Candidate types for Choice types, in declared order
    pub fn candidates(&self) -> &[DeclaredType] {
        match self {
            Self::Choice { candidates } => candidates,
            _ => &[],
        }
    }
}

impl From<FieldKind> for DeclaredType {
    /// Bare type for a kind: no format, no schema, no candidates
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Boolean => Self::Boolean,
            FieldKind::Byte => Self::Byte,
            FieldKind::Short => Self::Short,
            FieldKind::Int => Self::Int,
            FieldKind::Long => Self::Long,
            FieldKind::BigInt => Self::BigInt,
            FieldKind::Float => Self::Float,
            FieldKind::Double => Self::Double,
            FieldKind::Char => Self::Char,
            FieldKind::String => Self::string(),
            FieldKind::Date => Self::date(),
            FieldKind::Time => Self::time(),
            FieldKind::Timestamp => Self::timestamp(),
            FieldKind::Array => Self::Array,
            FieldKind::Map => Self::Map,
            FieldKind::Record => Self::schemaless_record(),
            FieldKind::Choice => Self::Choice {
                candidates: Vec::new(),
            },
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choice { candidates } => {
                write!(f, "Choice[")?;
                for (i, candidate) in candidates.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", candidate)?;
                }
                write!(f, "]")
            }
            other => match other.format() {
                Some(format) => write!(f, "{}:{}", other.kind(), format),
                None => write!(f, "{}", other.kind()),
            },
        }
    }
}
