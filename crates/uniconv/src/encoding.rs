//! Type-level description of the three encodings and the unit types that may
//! carry them.

use core::fmt;

use crate::{
    CodePoint, ErrorKind,
    codec::{self, Utf8Group, Utf16Group, Utf32Group},
};

mod sealed {
    pub trait Sealed {}
}

/// One of UTF-8, UTF-16 or UTF-32.
///
/// Implemented only by [`Utf8`], [`Utf16`] and [`Utf32`]. Sequence drivers
/// are generic over this trait, so the encoding pair of a conversion is fixed
/// at compile time.
pub trait Encoding: sealed::Sealed + Copy + fmt::Debug + Default + 'static {
    /// The unsigned unit this encoding is defined over.
    type Unit: Copy + Default + fmt::Debug;

    /// Fixed-capacity encoded form of one code point.
    type Group: AsRef<[Self::Unit]> + Copy;

    /// Largest number of units in one group.
    const MAX_GROUP_LEN: usize;

    /// Length of the group started by `lead`.
    ///
    /// # Errors
    ///
    /// If `lead` cannot start a group.
    fn group_len(lead: Self::Unit) -> Result<usize, ErrorKind>;

    /// Decodes one complete group.
    ///
    /// # Errors
    ///
    /// If the group is malformed or decodes above U+10FFFF.
    fn decode(group: &[Self::Unit]) -> Result<CodePoint, ErrorKind>;

    /// Encodes one code point.
    fn encode(cp: CodePoint) -> Self::Group;
}

/// UTF-8, over bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf8;

/// UTF-16, over 16-bit units in native order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf16;

/// UTF-32, over 32-bit units in native order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf32;

impl sealed::Sealed for Utf8 {}
impl sealed::Sealed for Utf16 {}
impl sealed::Sealed for Utf32 {}

impl Encoding for Utf8 {
    type Unit = u8;
    type Group = Utf8Group;
    const MAX_GROUP_LEN: usize = 4;

    #[inline]
    fn group_len(lead: u8) -> Result<usize, ErrorKind> {
        codec::utf8_unit_count(lead).ok_or_else(|| codec::utf8_lead_error(lead))
    }

    #[inline]
    fn decode(group: &[u8]) -> Result<CodePoint, ErrorKind> {
        codec::decode_utf8(group)
    }

    #[inline]
    fn encode(cp: CodePoint) -> Utf8Group {
        cp.encode_utf8()
    }
}

impl Encoding for Utf16 {
    type Unit = u16;
    type Group = Utf16Group;
    const MAX_GROUP_LEN: usize = 2;

    #[inline]
    fn group_len(lead: u16) -> Result<usize, ErrorKind> {
        Ok(codec::utf16_unit_count(lead))
    }

    #[inline]
    fn decode(group: &[u16]) -> Result<CodePoint, ErrorKind> {
        codec::decode_utf16(group)
    }

    #[inline]
    fn encode(cp: CodePoint) -> Utf16Group {
        cp.encode_utf16()
    }
}

impl Encoding for Utf32 {
    type Unit = u32;
    type Group = Utf32Group;
    const MAX_GROUP_LEN: usize = 1;

    #[inline]
    fn group_len(_lead: u32) -> Result<usize, ErrorKind> {
        Ok(1)
    }

    #[inline]
    fn decode(group: &[u32]) -> Result<CodePoint, ErrorKind> {
        let &unit = group.first().ok_or(ErrorKind::TruncatedSequence)?;
        CodePoint::try_from(unit)
    }

    #[inline]
    fn encode(cp: CodePoint) -> Utf32Group {
        Utf32Group::new([cp.to_u32()], 1)
    }
}

/// A same-width integer usable as a unit of some [`Encoding`].
///
/// Signed types are reinterpreted bit for bit, so buffers of C `char` (`i8`)
/// or 16/32-bit wide characters can be converted without copying them into an
/// unsigned buffer first.
pub trait CodeUnit: Copy + 'static {
    /// The encoding a sequence of this unit is read as.
    type Encoding: Encoding;

    /// The unit's bits as the encoding's unsigned unit.
    fn into_raw(self) -> <Self::Encoding as Encoding>::Unit;

    /// The inverse of [`CodeUnit::into_raw`].
    fn from_raw(raw: <Self::Encoding as Encoding>::Unit) -> Self;
}

macro_rules! impl_code_unit {
    ($($unsigned:ty, $signed:ty => $encoding:ty;)*) => {$(
        impl CodeUnit for $unsigned {
            type Encoding = $encoding;

            #[inline]
            fn into_raw(self) -> $unsigned {
                self
            }

            #[inline]
            fn from_raw(raw: $unsigned) -> Self {
                raw
            }
        }

        impl CodeUnit for $signed {
            type Encoding = $encoding;

            #[inline]
            fn into_raw(self) -> $unsigned {
                <$unsigned>::from_ne_bytes(self.to_ne_bytes())
            }

            #[inline]
            fn from_raw(raw: $unsigned) -> Self {
                <$signed>::from_ne_bytes(raw.to_ne_bytes())
            }
        }
    )*};
}

impl_code_unit! {
    u8, i8 => Utf8;
    u16, i16 => Utf16;
    u32, i32 => Utf32;
}
