use super::Utf8Group;
use crate::{CodePoint, ErrorKind};

/// Classifies a UTF-8 lead byte by its high bits.
///
/// Returns the total length of the group it starts, or `None` for bytes that
/// cannot start a group: continuation bytes (`10xxxxxx`), the overlong-only
/// leads `0xC0` and `0xC1`, and anything from `0xF8` up.
#[inline]
#[must_use]
pub const fn utf8_unit_count(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

/// Whether `b` matches `10xxxxxx`.
#[inline]
#[must_use]
pub const fn is_utf8_continuation_byte(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// The error for a byte rejected by [`utf8_unit_count`].
#[inline]
pub(crate) fn lead_error(lead: u8) -> ErrorKind {
    match lead {
        // Any two-byte group with these leads encodes a value below 0x80.
        0xC0 | 0xC1 => ErrorKind::OverlongEncoding,
        _ => ErrorKind::InvalidLeadUnit(u32::from(lead)),
    }
}

/// Decodes the UTF-8 group at the start of `bytes`.
///
/// The group length comes from the lead byte; bytes past the group are
/// ignored.
///
/// # Errors
///
/// - [`ErrorKind::InvalidLeadUnit`] if the first byte cannot start a group,
///   or [`ErrorKind::OverlongEncoding`] for `0xC0`/`0xC1`.
/// - [`ErrorKind::TruncatedSequence`] if `bytes` is shorter than the group.
/// - [`ErrorKind::InvalidContinuation`] for a byte not matching `10xxxxxx`.
/// - [`ErrorKind::OverlongEncoding`] if fewer bytes would have sufficed.
/// - [`ErrorKind::CodepointOutOfRange`] for four-byte groups above U+10FFFF.
pub fn decode_utf8(bytes: &[u8]) -> Result<CodePoint, ErrorKind> {
    let &lead = bytes.first().ok_or(ErrorKind::TruncatedSequence)?;
    let count = utf8_unit_count(lead).ok_or_else(|| lead_error(lead))?;
    let group = bytes.get(..count).ok_or(ErrorKind::TruncatedSequence)?;

    if let Some(&bad) = group[1..].iter().find(|&&b| !is_utf8_continuation_byte(b)) {
        return Err(ErrorKind::InvalidContinuation(u32::from(bad)));
    }

    let value = match *group {
        [b0] => u32::from(b0),
        [b0, b1] => {
            if b0 & 0x1E == 0 {
                return Err(ErrorKind::OverlongEncoding);
            }
            (u32::from(b0 & 0x1F) << 6) | u32::from(b1 & 0x3F)
        }
        [b0, b1, b2] => {
            if b0 & 0x0F == 0 && b1 & 0x20 == 0 {
                return Err(ErrorKind::OverlongEncoding);
            }
            (u32::from(b0 & 0x0F) << 12) | (u32::from(b1 & 0x3F) << 6) | u32::from(b2 & 0x3F)
        }
        [b0, b1, b2, b3] => {
            if b0 & 0x07 == 0 && b1 & 0x30 == 0 {
                return Err(ErrorKind::OverlongEncoding);
            }
            (u32::from(b0 & 0x07) << 18)
                | (u32::from(b1 & 0x3F) << 12)
                | (u32::from(b2 & 0x3F) << 6)
                | u32::from(b3 & 0x3F)
        }
        _ => unreachable!("utf8_unit_count is at most 4"),
    };

    CodePoint::try_from(value)
}

/// Encodes `value` as UTF-8.
///
/// Surrogate values are encoded like any other three-byte code point.
///
/// # Errors
///
/// [`ErrorKind::CodepointOutOfRange`] if `value` is above 0x10FFFF.
pub fn encode_utf8(value: u32) -> Result<Utf8Group, ErrorKind> {
    let cp = CodePoint::try_from(value)?;
    Ok(pack_utf8(cp.to_u32()))
}

/// Packs an in-range value into lead and continuation bytes.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn pack_utf8(value: u32) -> Utf8Group {
    debug_assert!(value <= 0x10_FFFF);
    let cont = |shift: u32| 0x80 | ((value >> shift) & 0x3F) as u8;
    match value {
        0..0x80 => Utf8Group::new([value as u8, 0, 0, 0], 1),
        0x80..0x800 => Utf8Group::new([0xC0 | (value >> 6) as u8, cont(0), 0, 0], 2),
        0x800..0x1_0000 => Utf8Group::new([0xE0 | (value >> 12) as u8, cont(6), cont(0), 0], 3),
        _ => Utf8Group::new(
            [0xF0 | (value >> 18) as u8, cont(12), cont(6), cont(0)],
            4,
        ),
    }
}
