//! Error code definitions for signature diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (alphabet membership, length limit)
//! - E02xx: Structural errors (containers, arity, placement)
//! - E03xx: Nesting-depth errors

use std::fmt;

/// Error codes for signature diagnostics
///
/// Each error code represents a specific way an input can violate the
/// grammar, enabling filtering, documentation, and reuse by host
/// bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Character outside the signature alphabet
    E0101,
    /// Signature exceeds the maximum length
    E0102,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Array code with no following element type
    E0201,
    /// Unterminated struct
    E0202,
    /// Empty struct body
    E0203,
    /// Unterminated dict entry
    E0204,
    /// Dict entry with no key type
    E0205,
    /// Dict entry key is not a basic type
    E0206,
    /// Dict entry with more than one value type
    E0207,
    /// Dict entry outside the element position of an array
    E0208,
    /// Unexpected closing bracket
    E0209,

    // =========================================================================
    // E03xx: Nesting-depth errors
    // =========================================================================
    /// Array nesting exceeds the recursion limit
    E0301,
    /// Struct/dict-entry nesting exceeds the recursion limit
    E0302,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            // Structural
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0207 => "E0207",
            Self::E0208 => "E0208",
            Self::E0209 => "E0209",
            // Nesting
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
        }
    }

    /// Default human-readable message for this code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unknown type code",
            Self::E0102 => "signature too long",
            Self::E0201 => "truncated array type",
            Self::E0202 => "unterminated struct",
            Self::E0203 => "empty struct body not permitted",
            Self::E0204 => "unterminated dict entry",
            Self::E0205 => "dict entry is missing a key type",
            Self::E0206 => "dict entry key must be a basic type",
            Self::E0207 => "dict entry must contain exactly one value type",
            Self::E0208 => "dict entry only permitted as an array element type",
            Self::E0301 => "array nesting too deep",
            Self::E0302 => "struct nesting too deep",
            Self::E0209 => "unexpected closing bracket",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
