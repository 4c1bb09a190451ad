//! Field kinds
//!
//! The closed set of kinds a record field can be declared with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a declared record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Boolean (true/false)
    Boolean,
    /// 8-bit signed integer
    Byte,
    /// 16-bit signed integer
    Short,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// Unbounded integer
    BigInt,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// Single character
    Char,
    /// Text
    String,
    /// Calendar date (UTC)
    Date,
    /// Time of day (UTC)
    Time,
    /// Date and time (UTC)
    Timestamp,
    /// Ordered sequence of values
    Array,
    /// Text-keyed mapping of values
    Map,
    /// Nested record with its own schema
    Record,
    /// Union of candidate types
    Choice,
}

impl FieldKind {
    /// Every kind, in declaration order
    pub const ALL: [FieldKind; 17] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::BigInt,
        Self::Float,
        Self::Double,
        Self::Char,
        Self::String,
        Self::Date,
        Self::Time,
        Self::Timestamp,
        Self::Array,
        Self::Map,
        Self::Record,
        Self::Choice,
    ];

    /// Get the simple name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::BigInt => "BigInt",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Char => "Char",
            Self::String => "String",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Timestamp => "Timestamp",
            Self::Array => "Array",
            Self::Map => "Map",
            Self::Record => "Record",
            Self::Choice => "Choice",
        }
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        self.is_integral() || self.is_floating()
    }

    /// Check if this kind is an integer kind
    pub const fn is_integral(&self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::BigInt
        )
    }

    /// Check if this kind is a floating point kind
    pub const fn is_floating(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Check if this kind is temporal
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::Timestamp)
    }

    /// Check if this kind has sub-structure
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Array | Self::Map | Self::Record | Self::Choice)
    }

    /// Standard UTC pattern for temporal kinds, in strftime syntax
    pub const fn default_format(&self) -> Option<&'static str> {
        match self {
            Self::Date => Some("%Y-%m-%d"),
            Self::Time => Some("%H:%M:%S"),
            Self::Timestamp => Some("%Y-%m-%d %H:%M:%S"),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
