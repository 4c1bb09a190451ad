//! Type catalog for schema-typed records
//!
//! This crate defines the pieces the coercer works against:
//! - Field kinds (Boolean, Int, Date, Record, Choice, etc.)
//! - Declared types with their formats, child schemas and candidates
//! - Record schemas
//! - Runtime values, maps and records
//! - UTC temporal formats

mod declared;
mod error;
mod json;
mod kind;
mod schema;
mod temporal;
mod value;

pub use declared::*;
pub use error::*;
pub use kind::*;
pub use schema::*;
pub use temporal::*;
pub use value::*;
