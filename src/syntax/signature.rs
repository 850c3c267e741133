//! The validated signature value
//!
//! A [`Signature`] behaves like an immutable string whose values are
//! restricted to well-formed signatures. It is a small value wrapping the
//! text rather than a string subtype: equality, ordering, and hashing
//! delegate to the text, and string ergonomics come from `Deref`.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

use smol_str::SmolStr;

use crate::parser::{SignatureError, validate};

use super::cursor::CompleteTypes;

/// A validated signature: zero or more single complete types.
///
/// `variant_level` indicates how many nested variant containers the value
/// described by this signature is contained in: a wire value that is a
/// variant containing a variant containing an int32 carries an `"i"`
/// signature with `variant_level` 2. It is descriptive metadata only; it
/// is not checked against the text and takes no part in comparison or
/// hashing.
///
/// Iterating yields one owned `Signature` per top-level complete type:
///
/// ```
/// use typesig::Signature;
///
/// let sig = Signature::new("ia{sv}")?;
/// let types: Vec<Signature> = sig.iter().collect();
/// assert_eq!(types, ["i", "a{sv}"]);
/// # Ok::<(), typesig::SignatureError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Signature {
    text: SmolStr,
    variant_level: u32,
}

impl Signature {
    /// Validate `text` and wrap it with `variant_level` 0.
    pub fn new(text: impl AsRef<str>) -> Result<Self, SignatureError> {
        Self::with_variant_level(text, 0)
    }

    /// Validate `text` and wrap it with the given variant level.
    pub fn with_variant_level(
        text: impl AsRef<str>,
        variant_level: u32,
    ) -> Result<Self, SignatureError> {
        let text = text.as_ref();
        validate(text)?;
        Ok(Self {
            text: SmolStr::new(text),
            variant_level,
        })
    }

    /// Wrap text already known to be valid, skipping validation.
    ///
    /// Only for substrings the cursor carved out of a validated
    /// signature: a single complete type of a valid signature is itself
    /// a valid signature.
    pub(crate) fn new_unchecked(text: &str) -> Self {
        debug_assert!(
            validate(text).is_ok(),
            "new_unchecked on unvalidated text {text:?}"
        );
        Self {
            text: SmolStr::new(text),
            variant_level: 0,
        }
    }

    /// The signature text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many nested variant containers this signature is wrapped in.
    pub fn variant_level(&self) -> u32 {
        self.variant_level
    }

    /// Iterate over the top-level single complete types.
    ///
    /// Each item is a fresh `Signature` with `variant_level` 0 (a
    /// decomposed element type is not itself wrapped in a variant). The
    /// iterator keeps the text alive on its own, so the source may be
    /// dropped mid-iteration. It is finite and fused; to iterate again,
    /// call this method again for a fresh, independent iterator.
    pub fn iter(&self) -> CompleteTypes {
        CompleteTypes::new(self)
    }

    /// Idempotent conversion into a `Signature`.
    ///
    /// An existing `Signature` passes through untouched, with no
    /// re-validation and its variant level intact; a string is validated.
    pub fn coerce<T: IntoSignature>(value: T) -> Result<Self, SignatureError> {
        value.into_signature()
    }

    /// Like [`Signature::coerce`], with `None` passing through untouched.
    pub fn coerce_opt<T: IntoSignature>(value: Option<T>) -> Result<Option<Self>, SignatureError> {
        value.map(IntoSignature::into_signature).transpose()
    }

    /// A clone of the text sharing the same backing storage.
    pub(crate) fn shared_text(&self) -> SmolStr {
        self.text.clone()
    }
}

/// The empty signature (zero complete types), variant level 0.
impl Default for Signature {
    fn default() -> Self {
        Self {
            text: SmolStr::default(),
            variant_level: 0,
        }
    }
}

/// Conversion into a validated [`Signature`].
///
/// Already-validated values convert without re-validation or copying;
/// untrusted strings are validated. This is the boundary used when a
/// caller may hand over either form.
pub trait IntoSignature {
    fn into_signature(self) -> Result<Signature, SignatureError>;
}

impl IntoSignature for Signature {
    fn into_signature(self) -> Result<Signature, SignatureError> {
        Ok(self)
    }
}

impl IntoSignature for &Signature {
    fn into_signature(self) -> Result<Signature, SignatureError> {
        Ok(self.clone())
    }
}

impl IntoSignature for &str {
    fn into_signature(self) -> Result<Signature, SignatureError> {
        Signature::new(self)
    }
}

impl IntoSignature for String {
    fn into_signature(self) -> Result<Signature, SignatureError> {
        Signature::new(self)
    }
}

// variant_level is metadata: all comparison goes through the text

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Signature {}

impl PartialOrd for Signature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Signature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.as_str().hash(state);
    }
}

impl PartialEq<str> for Signature {
    fn eq(&self, other: &str) -> bool {
        self.text.as_str() == other
    }
}

impl PartialEq<&str> for Signature {
    fn eq(&self, other: &&str) -> bool {
        self.text.as_str() == *other
    }
}

impl Deref for Signature {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Borrow<str> for Signature {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Signature {
    type Error = SignatureError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = Signature;
    type IntoIter = CompleteTypes;

    fn into_iter(self) -> CompleteTypes {
        self.iter()
    }
}
