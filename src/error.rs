//! Deserialization outcome value type

use thiserror::Error;

use crate::code::ErrorCode;

/// Outcome of a deserialization attempt
///
/// Compares against [`ErrorCode`] for exhaustive branching and against
/// `bool` as a failure flag: the value equals `true` iff the category is
/// anything other than [`ErrorCode::Ok`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("{0}")]
pub struct DeserializationError(ErrorCode);

impl DeserializationError {
    /// Create an outcome carrying the given category
    pub fn new(code: ErrorCode) -> Self {
        Self(code)
    }

    /// The stored category, useful for match statements
    pub fn code(self) -> ErrorCode {
        self.0
    }

    /// Whether deserialization succeeded
    pub fn is_ok(self) -> bool {
        self.0 == ErrorCode::Ok
    }

    /// Whether deserialization failed
    pub fn is_failure(self) -> bool {
        self.0 != ErrorCode::Ok
    }

    /// Stable human-readable label for the stored category
    pub fn as_str(self) -> &'static str {
        self.0.as_str()
    }
}

impl From<ErrorCode> for DeserializationError {
    fn from(code: ErrorCode) -> Self {
        Self(code)
    }
}

// Compare with ErrorCode
impl PartialEq<ErrorCode> for DeserializationError {
    fn eq(&self, other: &ErrorCode) -> bool {
        self.0 == *other
    }
}

impl PartialEq<DeserializationError> for ErrorCode {
    fn eq(&self, other: &DeserializationError) -> bool {
        *self == other.0
    }
}

// Behaves like a failure flag
impl PartialEq<bool> for DeserializationError {
    fn eq(&self, other: &bool) -> bool {
        self.is_failure() == *other
    }
}

impl PartialEq<DeserializationError> for bool {
    fn eq(&self, other: &DeserializationError) -> bool {
        *self == other.is_failure()
    }
}

impl From<serde_json::Error> for DeserializationError {
    /// Classify a `serde_json` parse error into an outcome category.
    ///
    /// `serde_json` reports a document with no value at all as EOF at
    /// line 1, column 0; any other EOF means the document was cut short.
    /// An I/O failure also leaves the document unread past some point.
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let code = match err.classify() {
            Category::Eof if err.line() == 1 && err.column() == 0 => ErrorCode::EmptyInput,
            Category::Eof | Category::Io => ErrorCode::IncompleteInput,
            Category::Syntax | Category::Data => ErrorCode::InvalidInput,
        };
        Self(code)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DeserializationError>;
