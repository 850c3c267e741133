//! The single-character type-code alphabet and the grammar limits.

/// Maximum length of a signature, in bytes.
pub const MAX_SIGNATURE_LENGTH: usize = 255;

/// Maximum number of nested array types on one path.
pub const MAX_ARRAY_NESTING: usize = 32;

/// Maximum number of nested struct and dict-entry types on one path.
/// Structs and dict entries share this counter; arrays are counted
/// separately.
pub const MAX_STRUCT_NESTING: usize = 32;

/// One character of the signature alphabet.
///
/// The thirteen basic codes each denote a complete scalar type on their
/// own. `v` is also complete in itself: a variant's contents are typed at
/// the value level, not in the signature. The remaining codes open or
/// close container types and are only meaningful in context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// `y` - 8-bit unsigned integer
    Byte,
    /// `b` - boolean
    Boolean,
    /// `n` - 16-bit signed integer
    Int16,
    /// `q` - 16-bit unsigned integer
    UInt16,
    /// `i` - 32-bit signed integer
    Int32,
    /// `u` - 32-bit unsigned integer
    UInt32,
    /// `x` - 64-bit signed integer
    Int64,
    /// `t` - 64-bit unsigned integer
    UInt64,
    /// `d` - IEEE 754 double
    Double,
    /// `s` - UTF-8 string
    String,
    /// `o` - object path
    ObjectPath,
    /// `g` - type signature
    Signature,
    /// `h` - Unix file descriptor
    UnixFd,
    /// `v` - variant, typed at the value level
    Variant,
    /// `a` - array of the one following complete type
    Array,
    /// `(` - opens a struct
    StructOpen,
    /// `)` - closes a struct
    StructClose,
    /// `{` - opens a dict entry
    DictOpen,
    /// `}` - closes a dict entry
    DictClose,
}

impl TypeCode {
    /// Look up the code for a character.
    ///
    /// Returns `None` for characters outside the alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'y' => Self::Byte,
            'b' => Self::Boolean,
            'n' => Self::Int16,
            'q' => Self::UInt16,
            'i' => Self::Int32,
            'u' => Self::UInt32,
            'x' => Self::Int64,
            't' => Self::UInt64,
            'd' => Self::Double,
            's' => Self::String,
            'o' => Self::ObjectPath,
            'g' => Self::Signature,
            'h' => Self::UnixFd,
            'v' => Self::Variant,
            'a' => Self::Array,
            '(' => Self::StructOpen,
            ')' => Self::StructClose,
            '{' => Self::DictOpen,
            '}' => Self::DictClose,
            _ => return None,
        })
    }

    /// The character this code is written as.
    pub fn as_char(self) -> char {
        match self {
            Self::Byte => 'y',
            Self::Boolean => 'b',
            Self::Int16 => 'n',
            Self::UInt16 => 'q',
            Self::Int32 => 'i',
            Self::UInt32 => 'u',
            Self::Int64 => 'x',
            Self::UInt64 => 't',
            Self::Double => 'd',
            Self::String => 's',
            Self::ObjectPath => 'o',
            Self::Signature => 'g',
            Self::UnixFd => 'h',
            Self::Variant => 'v',
            Self::Array => 'a',
            Self::StructOpen => '(',
            Self::StructClose => ')',
            Self::DictOpen => '{',
            Self::DictClose => '}',
        }
    }

    /// Basic types are fixed single characters with no recursion.
    ///
    /// Only a basic type may be a dict-entry key.
    pub fn is_basic(self) -> bool {
        !matches!(
            self,
            Self::Variant
                | Self::Array
                | Self::StructOpen
                | Self::StructClose
                | Self::DictOpen
                | Self::DictClose
        )
    }
}
