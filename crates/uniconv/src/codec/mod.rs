//! Code point level transcoding: one unit-group in, one unit-group out.
//!
//! Everything here is pure and allocation free. Encoders return a
//! [`UnitGroup`] that knows how many of its slots are meaningful, so callers
//! append exactly [`UnitGroup::len`] units and never infer a length from
//! zero padding.

use core::{fmt, ops::Deref};

use crate::ErrorKind;

mod utf16;
mod utf8;


pub use utf8::{decode_utf8, encode_utf8, is_utf8_continuation_byte, utf8_unit_count};
pub use utf16::{
    decode_utf16, encode_utf16, is_utf16_high_surrogate, is_utf16_low_surrogate,
    utf16_unit_count,
};

pub(crate) use utf8::{lead_error as utf8_lead_error, pack_utf8};
pub(crate) use utf16::pack_utf16;

/// Up to `N` encoded units representing exactly one code point.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitGroup<U, const N: usize> {
    units: [U; N],
    len: u8,
}

/// One code point encoded as 1 to 4 UTF-8 bytes.
pub type Utf8Group = UnitGroup<u8, 4>;

/// One code point encoded as 1 or 2 UTF-16 units.
pub type Utf16Group = UnitGroup<u16, 2>;

/// One code point as a single UTF-32 unit.
pub type Utf32Group = UnitGroup<u32, 1>;

impl<U: Copy, const N: usize> UnitGroup<U, N> {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn new(units: [U; N], len: usize) -> Self {
        debug_assert!(len > 0 && len <= N);
        Self {
            units,
            len: len as u8,
        }
    }

    /// The meaningful units.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[U] {
        &self.units[..usize::from(self.len)]
    }

    /// Number of meaningful units, between 1 and `N`.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// Always `false`: a group encodes exactly one code point.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<U: Copy, const N: usize> Deref for UnitGroup<U, N> {
    type Target = [U];

    #[inline]
    fn deref(&self) -> &[U] {
        self.as_slice()
    }
}

impl<U: Copy, const N: usize> AsRef<[U]> for UnitGroup<U, N> {
    #[inline]
    fn as_ref(&self) -> &[U] {
        self.as_slice()
    }
}

impl fmt::Debug for Utf8Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Utf8Group")
            .field(&bstr::BStr::new(self.as_slice()))
            .finish()
    }
}

impl fmt::Debug for Utf16Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Utf16Group(")?;
        for (i, unit) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "0x{unit:04X}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for Utf32Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Utf32Group(0x{:08X})", self.units[0])
    }
}

/// Decodes one UTF-8 group and re-encodes it as UTF-16.
///
/// # Errors
///
/// Any error from [`decode_utf8`].
pub fn utf8_to_utf16_group(bytes: &[u8]) -> Result<Utf16Group, ErrorKind> {
    let cp = decode_utf8(bytes)?;
    Ok(cp.encode_utf16())
}

/// Decodes one UTF-16 group and re-encodes it as UTF-8.
///
/// # Errors
///
/// Any error from [`decode_utf16`].
pub fn utf16_to_utf8_group(units: &[u16]) -> Result<Utf8Group, ErrorKind> {
    let cp = decode_utf16(units)?;
    Ok(cp.encode_utf8())
}
