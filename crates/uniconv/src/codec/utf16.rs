use super::Utf16Group;
use crate::{CodePoint, ErrorKind};

/// Whether `u` is in 0xD800..0xDC00.
#[inline]
#[must_use]
pub const fn is_utf16_high_surrogate(u: u16) -> bool {
    matches!(u, 0xD800..0xDC00)
}

/// Whether `u` is in 0xDC00..0xE000.
#[inline]
#[must_use]
pub const fn is_utf16_low_surrogate(u: u16) -> bool {
    matches!(u, 0xDC00..0xE000)
}

/// Length of the UTF-16 group started by `lead`: two for a high surrogate,
/// one otherwise.
#[inline]
#[must_use]
pub const fn utf16_unit_count(lead: u16) -> usize {
    if is_utf16_high_surrogate(lead) { 2 } else { 1 }
}

/// Decodes the UTF-16 group at the start of `units`.
///
/// A high surrogate followed by a low surrogate decodes to the paired code
/// point. A lone surrogate followed by a zero unit decodes to the surrogate's
/// own value; for a low surrogate a missing second unit counts as zero. The
/// second unit is ignored when the first is not a surrogate.
///
/// # Errors
///
/// - [`ErrorKind::TruncatedSequence`] if `units` is empty, or holds only a
///   high surrogate.
/// - [`ErrorKind::InvalidContinuation`] if a high surrogate is followed by a
///   unit that is neither a low surrogate nor zero.
/// - [`ErrorKind::InvalidLeadUnit`] if a low surrogate is followed by a
///   non-zero unit.
pub fn decode_utf16(units: &[u16]) -> Result<CodePoint, ErrorKind> {
    let (&lead, rest) = units.split_first().ok_or(ErrorKind::TruncatedSequence)?;
    let trail = rest.first().copied();

    let value = if is_utf16_high_surrogate(lead) {
        match trail {
            Some(low) if is_utf16_low_surrogate(low) => {
                0x1_0000 + ((u32::from(lead) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
            }
            Some(0) => u32::from(lead),
            Some(other) => return Err(ErrorKind::InvalidContinuation(u32::from(other))),
            None => return Err(ErrorKind::TruncatedSequence),
        }
    } else if is_utf16_low_surrogate(lead) {
        match trail {
            None | Some(0) => u32::from(lead),
            Some(_) => return Err(ErrorKind::InvalidLeadUnit(u32::from(lead))),
        }
    } else {
        u32::from(lead)
    };

    CodePoint::try_from(value)
}

/// Encodes `value` as UTF-16, splitting values from 0x10000 up into a
/// surrogate pair.
///
/// # Errors
///
/// [`ErrorKind::CodepointOutOfRange`] if `value` is above 0x10FFFF.
pub fn encode_utf16(value: u32) -> Result<Utf16Group, ErrorKind> {
    let cp = CodePoint::try_from(value)?;
    Ok(pack_utf16(cp.to_u32()))
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn pack_utf16(value: u32) -> Utf16Group {
    debug_assert!(value <= 0x10_FFFF);
    if value < 0x1_0000 {
        Utf16Group::new([value as u16, 0], 1)
    } else {
        let offset = value - 0x1_0000;
        let high = (offset / 0x400 + 0xD800) as u16;
        let low = (offset % 0x400 + 0xDC00) as u16;
        Utf16Group::new([high, low], 2)
    }
}
