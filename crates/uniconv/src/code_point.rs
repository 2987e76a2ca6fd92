//! A Unicode code point: from U+0000 to U+10FFFF.

use core::fmt;

use crate::{
    ErrorKind,
    codec::{self, Utf8Group, Utf16Group},
};

/// A Unicode code point: from U+0000 to U+10FFFF.
///
/// Unlike [`char`], surrogates (U+D800 to U+DFFF) are representable, since
/// a lone UTF-16 surrogate may decode to one.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy, Default)]
pub struct CodePoint {
    value: u32,
}

/// Formats as `U+` followed by four to six hexadecimal digits, e.g. `U+1F600`.
impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.value)
    }
}

impl CodePoint {
    /// The largest code point, U+10FFFF.
    pub const MAX: CodePoint = CodePoint { value: 0x10_FFFF };

    /// Creates a `CodePoint`, or `None` if `value` is above 0x10FFFF.
    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<CodePoint> {
        if value <= Self::MAX.value {
            Some(CodePoint { value })
        } else {
            None
        }
    }

    /// Creates a `CodePoint` from a `char`. Always succeeds.
    #[inline]
    #[must_use]
    pub const fn from_char(value: char) -> CodePoint {
        CodePoint {
            value: value as u32,
        }
    }

    /// Returns the numeric value.
    #[inline]
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.value
    }

    /// Returns the Unicode scalar value, or `None` for a surrogate.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> Option<char> {
        char::from_u32(self.value)
    }

    /// Whether the code point lies in U+D800..=U+DFFF.
    #[inline]
    #[must_use]
    pub const fn is_surrogate(self) -> bool {
        matches!(self.value, 0xD800..=0xDFFF)
    }

    /// Encodes as UTF-8. Infallible, as the value is already in range.
    #[must_use]
    pub fn encode_utf8(self) -> Utf8Group {
        codec::pack_utf8(self.value)
    }

    /// Encodes as UTF-16. Infallible, as the value is already in range.
    #[must_use]
    pub fn encode_utf16(self) -> Utf16Group {
        codec::pack_utf16(self.value)
    }
}

impl From<char> for CodePoint {
    #[inline]
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<CodePoint> for u32 {
    #[inline]
    fn from(cp: CodePoint) -> Self {
        cp.value
    }
}

impl TryFrom<u32> for CodePoint {
    type Error = ErrorKind;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u32(value).ok_or(ErrorKind::CodepointOutOfRange(value))
    }
}

impl TryFrom<CodePoint> for char {
    type Error = ErrorKind;

    fn try_from(cp: CodePoint) -> Result<Self, Self::Error> {
        cp.to_char().ok_or(ErrorKind::SurrogateCodePoint(cp.value))
    }
}
