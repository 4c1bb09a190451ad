//! Runtime value coercion for schema-typed records
//!
//! This crate ties together:
//! - The type catalog (field kinds, declared types, record schemas)
//! - Compatibility checking
//! - Conversion of loosely typed values to declared types
//!
//! # Example
//!
//! ```
//! use fieldcast::{DeclaredType, Value, convert, is_compatible};
//!
//! let ty = DeclaredType::Int;
//! assert!(is_compatible(&Value::from("42"), &ty));
//! assert_eq!(convert(&Value::from("42"), &ty, "count")?, Value::Int(42));
//! # Ok::<(), fieldcast::IllegalTypeConversion>(())
//! ```

// Re-export all public APIs from internal crates
pub use fieldcast_coerce as coerce;
pub use fieldcast_types as types;

// Convenience re-exports
pub use fieldcast_coerce::{
    Coercer, CoercionConfig, ConversionFailure, ConversionResult, IllegalTypeConversion,
    choose_candidate, convert, is_compatible, render_text,
};
pub use fieldcast_types::{
    DeclaredType, FieldKind, Instant, Record, RecordField, RecordSchema, SchemaError,
    SchemaResult, TemporalFormat, Value, ValueMap,
};
