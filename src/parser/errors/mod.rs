//! Rejection diagnostics for the signature grammar
//!
//! This module provides the error surface of the parser:
//! - Categorized error codes for filtering and documentation
//! - Byte-offset positions on every rejection, precise enough for a
//!   caller to build a human-readable diagnostic

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::SignatureError;
