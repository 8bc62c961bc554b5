//! DJSON Error - Deserialization outcome primitives
//!
//! This crate provides the error-reporting value type for the DJSON
//! deserializer with no I/O dependencies. It includes:
//!
//! - The closed set of outcome categories a parse attempt can report
//! - A value type usable as a boolean failure flag
//! - Stable display labels for logging
//! - Classification of `serde_json` parse errors
//!
//! Callers historically write `if err` to mean "if parsing failed"; the
//! value type preserves that contract by comparing equal to `true`
//! exactly when its category is not [`ErrorCode::Ok`].

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod code;
pub mod error;

// Re-export commonly used types
pub use code::ErrorCode;
pub use error::{DeserializationError, Result};
