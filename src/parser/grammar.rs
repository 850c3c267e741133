//! Recursive-descent grammar for signatures
//!
//! A signature is zero or more single complete types:
//!
//! ```text
//! signature       = complete-type*
//! complete-type   = basic-type | "v"
//!                 | "a" element-type
//!                 | "(" complete-type+ ")"
//! element-type    = complete-type
//!                 | "{" basic-type complete-type "}"
//! ```
//!
//! The matcher that locates the end of one complete type exists exactly
//! once, in [`TypeScanner`]; validation and the iteration cursor both go
//! through it so the two cannot disagree on the grammar.

use text_size::TextSize;
use tracing::trace;

use crate::base::{MAX_ARRAY_NESTING, MAX_SIGNATURE_LENGTH, MAX_STRUCT_NESTING, TypeCode};

use super::errors::{ErrorCode, SignatureError};
use super::lexer::{Token, TokenKind, tokenize};

/// Check that `text` is a well-formed sequence of zero or more single
/// complete types.
///
/// The empty string is valid. On rejection the error carries the byte
/// offset of the offending character and a categorized reason. Runs in
/// time linear in `text`.
pub fn validate(text: &str) -> Result<(), SignatureError> {
    if text.len() > MAX_SIGNATURE_LENGTH {
        let err = SignatureError::at_offset(
            ErrorCode::E0102,
            TextSize::new(MAX_SIGNATURE_LENGTH as u32),
        );
        trace!("[VALIDATE] rejected {} byte input: {}", text.len(), err);
        return Err(err);
    }

    let tokens = tokenize(text);
    let scanner = TypeScanner::new(&tokens, TextSize::of(text));
    let mut pos = 0;
    let mut count = 0usize;
    while pos < tokens.len() {
        match scanner.complete_type_end(pos) {
            Ok(end) => pos = end,
            Err(err) => {
                trace!("[VALIDATE] rejected '{}': {}", text, err);
                return Err(err);
            }
        }
        count += 1;
    }
    trace!("[VALIDATE] accepted '{}' ({} complete types)", text, count);
    Ok(())
}

/// Nesting-depth counters.
///
/// Arrays count on one counter, structs and dict entries on the other;
/// each is capped independently. Copied down the recursion, never back
/// up, so the counters always reflect the current path depth.
#[derive(Debug, Clone, Copy, Default)]
struct Nesting {
    arrays: usize,
    structs: usize,
}

impl Nesting {
    fn deeper_array(self, at: TextSize) -> Result<Self, SignatureError> {
        let arrays = self.arrays + 1;
        if arrays > MAX_ARRAY_NESTING {
            return Err(SignatureError::at_offset(ErrorCode::E0301, at));
        }
        Ok(Self { arrays, ..self })
    }

    fn deeper_struct(self, at: TextSize) -> Result<Self, SignatureError> {
        let structs = self.structs + 1;
        if structs > MAX_STRUCT_NESTING {
            return Err(SignatureError::at_offset(ErrorCode::E0302, at));
        }
        Ok(Self { structs, ..self })
    }
}

/// Matcher for single complete types over a token stream.
pub(crate) struct TypeScanner<'a> {
    tokens: &'a [Token],
    /// Offset reported for end-of-input errors
    end: TextSize,
}

impl<'a> TypeScanner<'a> {
    pub(crate) fn new(tokens: &'a [Token], end: TextSize) -> Self {
        Self { tokens, end }
    }

    fn kind(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|t| t.kind)
    }

    /// Byte offset of the token at `index`, or end-of-input
    fn offset(&self, index: usize) -> TextSize {
        self.tokens.get(index).map_or(self.end, |t| t.offset)
    }

    /// Find the exclusive end index of the single complete type starting
    /// at `start`.
    ///
    /// `start` must be a valid index. For arrays the span includes the
    /// element type; for structs and dict entries it includes the
    /// brackets and all nested content.
    pub(crate) fn complete_type_end(&self, start: usize) -> Result<usize, SignatureError> {
        self.complete_type(start, Nesting::default(), false)
    }

    fn complete_type(
        &self,
        start: usize,
        nesting: Nesting,
        as_array_element: bool,
    ) -> Result<usize, SignatureError> {
        let Some(kind) = self.kind(start) else {
            // every caller checks the bound before recursing
            unreachable!("complete_type called at end of input");
        };

        match kind {
            TokenKind::Error => Err(SignatureError::at_offset(
                ErrorCode::E0101,
                self.offset(start),
            )),

            TokenKind::Code(TypeCode::Array) => {
                let nesting = nesting.deeper_array(self.offset(start))?;
                let element = start + 1;
                if element >= self.tokens.len() {
                    return Err(SignatureError::at_offset(ErrorCode::E0201, self.end));
                }
                // only here may a dict entry start
                self.complete_type(element, nesting, true)
            }

            TokenKind::Code(TypeCode::StructOpen) => {
                let nesting = nesting.deeper_struct(self.offset(start))?;
                let mut inner = start + 1;
                let mut members = 0usize;
                loop {
                    if inner >= self.tokens.len() {
                        return Err(SignatureError::at_offset(ErrorCode::E0202, self.end));
                    }
                    if self.kind(inner) == Some(TokenKind::Code(TypeCode::StructClose)) {
                        if members == 0 {
                            return Err(SignatureError::at_offset(
                                ErrorCode::E0203,
                                self.offset(inner),
                            ));
                        }
                        return Ok(inner + 1);
                    }
                    inner = self.complete_type(inner, nesting, false)?;
                    members += 1;
                }
            }

            TokenKind::Code(TypeCode::DictOpen) => {
                if !as_array_element {
                    return Err(SignatureError::at_offset(
                        ErrorCode::E0208,
                        self.offset(start),
                    ));
                }
                let nesting = nesting.deeper_struct(self.offset(start))?;

                let key = start + 1;
                match self.kind(key) {
                    None => {
                        return Err(SignatureError::at_offset(ErrorCode::E0204, self.end));
                    }
                    Some(TokenKind::Error) => {
                        return Err(SignatureError::at_offset(
                            ErrorCode::E0101,
                            self.offset(key),
                        ));
                    }
                    Some(TokenKind::Code(TypeCode::DictClose)) => {
                        return Err(SignatureError::at_offset(
                            ErrorCode::E0205,
                            self.offset(key),
                        ));
                    }
                    Some(TokenKind::Code(code)) if !code.is_basic() => {
                        return Err(SignatureError::new(
                            ErrorCode::E0206,
                            format!(
                                "dict entry key must be a basic type, found '{}'",
                                code.as_char()
                            ),
                            self.offset(key),
                        ));
                    }
                    Some(TokenKind::Code(_)) => {}
                }

                let value = key + 1;
                if value >= self.tokens.len() {
                    return Err(SignatureError::at_offset(ErrorCode::E0204, self.end));
                }
                let close = self.complete_type(value, nesting, false)?;

                match self.kind(close) {
                    None => Err(SignatureError::at_offset(ErrorCode::E0204, self.end)),
                    Some(TokenKind::Code(TypeCode::DictClose)) => Ok(close + 1),
                    Some(TokenKind::Error) => Err(SignatureError::at_offset(
                        ErrorCode::E0101,
                        self.offset(close),
                    )),
                    Some(_) => Err(SignatureError::at_offset(
                        ErrorCode::E0207,
                        self.offset(close),
                    )),
                }
            }

            TokenKind::Code(TypeCode::StructClose | TypeCode::DictClose) => Err(
                SignatureError::at_offset(ErrorCode::E0209, self.offset(start)),
            ),

            // basic codes and 'v' are complete in themselves
            TokenKind::Code(_) => Ok(start + 1),
        }
    }
}
