//! Logos-based lexer for the signature alphabet
//!
//! Fast tokenization using the logos crate. Every alphabet token is a
//! single byte. Characters outside the alphabet become error tokens
//! rather than lexer failures, so the validator can report them with an
//! offset.

use crate::base::TypeCode;
use logos::Logos;
use text_size::TextSize;

/// A token with its kind and byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: TextSize,
}

/// Classification of one piece of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A character of the signature alphabet
    Code(TypeCode),
    /// Anything else; always rejected by the validator
    Error,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => TokenKind::Code(t.into()),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, offset })
    }
}

/// Tokenize an entire signature into a Vec
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TypeCode
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    #[token("y")]
    Byte,

    #[token("b")]
    Boolean,

    #[token("n")]
    Int16,

    #[token("q")]
    UInt16,

    #[token("i")]
    Int32,

    #[token("u")]
    UInt32,

    #[token("x")]
    Int64,

    #[token("t")]
    UInt64,

    #[token("d")]
    Double,

    #[token("s")]
    String,

    #[token("o")]
    ObjectPath,

    #[token("g")]
    Signature,

    #[token("h")]
    UnixFd,

    #[token("v")]
    Variant,

    #[token("a")]
    Array,

    #[token("(")]
    StructOpen,

    #[token(")")]
    StructClose,

    #[token("{")]
    DictOpen,

    #[token("}")]
    DictClose,
}

impl From<LogosToken> for TypeCode {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Byte => Self::Byte,
            LogosToken::Boolean => Self::Boolean,
            LogosToken::Int16 => Self::Int16,
            LogosToken::UInt16 => Self::UInt16,
            LogosToken::Int32 => Self::Int32,
            LogosToken::UInt32 => Self::UInt32,
            LogosToken::Int64 => Self::Int64,
            LogosToken::UInt64 => Self::UInt64,
            LogosToken::Double => Self::Double,
            LogosToken::String => Self::String,
            LogosToken::ObjectPath => Self::ObjectPath,
            LogosToken::Signature => Self::Signature,
            LogosToken::UnixFd => Self::UnixFd,
            LogosToken::Variant => Self::Variant,
            LogosToken::Array => Self::Array,
            LogosToken::StructOpen => Self::StructOpen,
            LogosToken::StructClose => Self::StructClose,
            LogosToken::DictOpen => Self::DictOpen,
            LogosToken::DictClose => Self::DictClose,
        }
    }
}
