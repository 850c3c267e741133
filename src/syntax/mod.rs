//! Typed signature values over the parser
//!
//! - [`Signature`] - an immutable, validated signature string plus its
//!   variant-level metadata
//! - [`CompleteTypes`] - lazy iteration over a signature's top-level
//!   single complete types
//! - [`IntoSignature`] - idempotent conversion into a validated value

mod cursor;
mod signature;

pub use cursor::CompleteTypes;
pub use signature::{IntoSignature, Signature};
