//! The signature rejection error
//!
//! A rejection carries a categorized code, a human-readable reason, and
//! the byte offset of the offending character (end-of-input errors such
//! as a truncated array report at the text's length).

use text_size::TextSize;
use thiserror::Error;

use super::codes::ErrorCode;

/// A grammar violation with its position
///
/// Validation failures are always surfaced to the caller of construction;
/// they are never downgraded to a usable-but-invalid signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message} at offset {}", u32::from(*.offset))]
pub struct SignatureError {
    /// Categorized error code
    pub code: ErrorCode,
    /// Human-readable reason
    pub message: String,
    /// Byte offset of the offending character
    pub offset: TextSize,
}

impl SignatureError {
    /// Create a new error with an explicit message
    pub fn new(code: ErrorCode, message: impl Into<String>, offset: TextSize) -> Self {
        Self {
            code,
            message: message.into(),
            offset,
        }
    }

    /// Create an error at an offset with the code's default message
    pub fn at_offset(code: ErrorCode, offset: TextSize) -> Self {
        Self::new(code, code.default_message(), offset)
    }
}
