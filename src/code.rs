//! Outcome category enumeration

use std::fmt;

/// Outcome category codes reported by a deserialization attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ErrorCode {
    /// Deserialization succeeded
    #[default]
    Ok = 0,
    /// Input contained no document at all
    EmptyInput = 1,
    /// Input ended before the document was complete
    IncompleteInput = 2,
    /// Input is not a valid document
    InvalidInput = 3,
    /// Deserializer ran out of memory
    NoMemory = 4,
    /// Input uses a feature the deserializer does not support
    NotSupported = 5,
    /// Document nesting exceeds the configured depth limit
    TooDeep = 6,
}

impl ErrorCode {
    /// Stable human-readable label for this category
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Ok => "Ok",
            ErrorCode::EmptyInput => "EmptyInput",
            ErrorCode::IncompleteInput => "IncompleteInput",
            ErrorCode::InvalidInput => "InvalidInput",
            ErrorCode::NoMemory => "NoMemory",
            ErrorCode::NotSupported => "NotSupported",
            ErrorCode::TooDeep => "TooDeep",
        }
    }

    /// Convert from u8
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(ErrorCode::Ok),
            1 => Some(ErrorCode::EmptyInput),
            2 => Some(ErrorCode::IncompleteInput),
            3 => Some(ErrorCode::InvalidInput),
            4 => Some(ErrorCode::NoMemory),
            5 => Some(ErrorCode::NotSupported),
            6 => Some(ErrorCode::TooDeep),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
