use thiserror::Error;

/// Why a single unit-group could not be decoded or encoded.
///
/// Values carried by the variants are the offending unit or code point, widened
/// to `u32` so that one type serves all three encodings.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ErrorKind {
    /// A UTF-8 lead byte, or a UTF-16 unit, that cannot start any valid group.
    #[error("invalid lead unit 0x{0:X}")]
    InvalidLeadUnit(u32),
    /// A UTF-8 continuation byte not matching `10xxxxxx`, or a UTF-16 unit
    /// after a high surrogate that is neither a low surrogate nor zero.
    #[error("invalid continuation unit 0x{0:X}")]
    InvalidContinuation(u32),
    /// A UTF-8 group longer than its code point requires.
    #[error("overlong encoding")]
    OverlongEncoding,
    /// The input ended inside a multi-unit group.
    #[error("truncated sequence")]
    TruncatedSequence,
    /// A decoded or source value above U+10FFFF.
    #[error("code point 0x{0:X} is out of range")]
    CodepointOutOfRange(u32),
    /// A code point in U+D800..=U+DFFF, reported only when
    /// [`TranscodeOptions::reject_surrogate_code_points`] is set.
    ///
    /// [`TranscodeOptions::reject_surrogate_code_points`]:
    ///     crate::TranscodeOptions::reject_surrogate_code_points
    #[error("surrogate code point U+{0:04X}")]
    SurrogateCodePoint(u32),
}

/// A sequence conversion failure, located at the first unit of the group that
/// failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[error("{kind} at unit offset {offset}")]
pub struct TranscodeError {
    pub(crate) kind: ErrorKind,
    pub(crate) offset: usize,
}

impl TranscodeError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The unit-level cause.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Index into the source sequence of the first unit of the failing group.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}
