//! # typesig-base
//!
//! Core library for D-Bus type signature validation, decomposition, and
//! iteration.
//!
//! A signature is a compact string of single-character type codes
//! describing the shape of values on the D-Bus wire: `"i"` is an int32,
//! `"ai"` an array of int32, `"a{sv}"` an array of dict entries mapping
//! strings to variants. This crate decides whether an arbitrary string is
//! a well-formed sequence of single complete types, and decomposes a
//! validated signature into those complete types lazily. It does not
//! marshal the values the signatures describe.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! syntax    → Signature value, complete-type cursor and iterator
//!   ↓
//! parser    → Logos lexer, recursive-descent validator, error codes
//!   ↓
//! base      → Primitives (TypeCode alphabet, grammar limits)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax)
// ============================================================================

/// Foundation types: the TypeCode alphabet and grammar limits
pub mod base;

/// Parser: Logos lexer, recursive-descent validator, error codes
pub mod parser;

/// Syntax: validated Signature values and complete-type iteration
pub mod syntax;

// Re-export commonly needed items
pub use base::{MAX_ARRAY_NESTING, MAX_SIGNATURE_LENGTH, MAX_STRUCT_NESTING, TypeCode};
pub use parser::{ErrorCode, SignatureError, validate};
pub use syntax::{CompleteTypes, IntoSignature, Signature};

/// Re-export the offset type used in tokens and diagnostics
pub use text_size::TextSize;
