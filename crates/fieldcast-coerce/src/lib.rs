//! Value coercion against declared field types
//!
//! This crate provides:
//! - Compatibility checks that never build the converted value
//! - Conversion of runtime values to declared types, recursing into records
//! - Choice resolution by first compatible candidate
//! - Default temporal format configuration

mod coercer;
mod compat;
mod composite;
mod config;
mod error;
mod scalar;
mod temporal;

pub use coercer::Coercer;
pub use config::CoercionConfig;
pub use error::{ConversionFailure, ConversionResult, IllegalTypeConversion};
pub use temporal::render_text;

use fieldcast_types::{DeclaredType, Value};

/// Check whether a value can be converted to a declared type
pub fn is_compatible(value: &Value, ty: &DeclaredType) -> bool {
    Coercer::global().is_compatible(value, ty)
}

/// Convert a value to a declared type using the default coercer
pub fn convert(value: &Value, ty: &DeclaredType, field: &str) -> ConversionResult<Value> {
    Coercer::global().convert(value, ty, field)
}

/// Pick the choice candidate a value converts to
pub fn choose_candidate<'t>(value: &Value, ty: &'t DeclaredType) -> Option<&'t DeclaredType> {
    Coercer::global().choose_candidate(value, ty)
}
