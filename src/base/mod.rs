//! Foundation types for the typesig crate.
//!
//! This module provides the fixed vocabulary of the signature grammar:
//! - [`TypeCode`] - the closed single-character alphabet
//! - [`MAX_SIGNATURE_LENGTH`], [`MAX_ARRAY_NESTING`], [`MAX_STRUCT_NESTING`]
//!   - the hard limits the grammar enforces
//!
//! This module has NO dependencies on other typesig modules.

mod code;

pub use code::{MAX_ARRAY_NESTING, MAX_SIGNATURE_LENGTH, MAX_STRUCT_NESTING, TypeCode};
