//! Complete-type cursor and iteration
//!
//! The cursor walks an already-validated signature one complete type at a
//! time, reusing the parser's matcher. It owns its own clone of the text,
//! so the source [`Signature`] may be dropped while iteration is in
//! flight.

use smol_str::SmolStr;
use text_size::TextSize;

use crate::parser::{Token, TypeScanner, tokenize};

use super::signature::Signature;

/// Cursor over the complete types of a validated signature.
///
/// The position always sits at the start of a complete type or at the end
/// of the text.
#[derive(Debug)]
struct Cursor {
    text: SmolStr,
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    fn new(signature: &Signature) -> Self {
        let text = signature.shared_text();
        let tokens = tokenize(&text);
        Self {
            text,
            tokens,
            pos: 0,
        }
    }

    /// Exclusive token index of the end of the complete type at `pos`.
    fn current_end(&self) -> usize {
        let scanner = TypeScanner::new(&self.tokens, TextSize::of(self.text.as_str()));
        match scanner.complete_type_end(self.pos) {
            Ok(end) => end,
            // the text was validated at construction; failing to rescan
            // it is a bug in the grammar, not in the input
            Err(err) => unreachable!("validated signature failed to rescan: {err}"),
        }
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.tokens
            .get(index)
            .map_or(self.text.len(), |t| u32::from(t.offset) as usize)
    }

    /// The maximal complete-type substring starting at the current
    /// position.
    fn current(&self) -> &str {
        let start = self.byte_offset(self.pos);
        let end = self.byte_offset(self.current_end());
        &self.text[start..end]
    }

    /// Step past the current complete type.
    ///
    /// Returns whether a further complete type exists; false exactly when
    /// the new position is the end of the text.
    fn advance(&mut self) -> bool {
        self.pos = self.current_end();
        self.pos < self.tokens.len()
    }
}

/// Iterator over the single complete types of a [`Signature`].
///
/// Finite, fused, and not restartable: once it reports the end it has
/// released its hold on the text and stays exhausted. A fresh call to
/// [`Signature::iter`] produces a fresh, independent iterator.
#[derive(Debug)]
pub struct CompleteTypes {
    // None once exhausted, and from the start for the empty signature:
    // iterating "" yields nothing without ever looking at position 0
    cursor: Option<Cursor>,
}

impl CompleteTypes {
    pub(crate) fn new(signature: &Signature) -> Self {
        let cursor = if signature.text().is_empty() {
            None
        } else {
            Some(Cursor::new(signature))
        };
        Self { cursor }
    }
}

impl Iterator for CompleteTypes {
    type Item = Signature;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.as_mut()?;
        let item = Signature::new_unchecked(cursor.current());
        if !cursor.advance() {
            // finished: drop the cursor, and with it the text reference
            self.cursor = None;
        }
        Some(item)
    }
}

impl std::iter::FusedIterator for CompleteTypes {}
