/// Configuration options for a [`Transcoder`](crate::Transcoder).
///
/// The defaults reproduce the permissive conversion performed by the free
/// functions such as [`utf16_to_utf8`](crate::utf16_to_utf8).
///
/// # Examples
///
/// ```rust
/// use uniconv::{ErrorKind, TranscodeOptions, Transcoder};
///
/// let strict = Transcoder::new(TranscodeOptions {
///     reject_surrogate_code_points: true,
/// });
/// let mut out: Vec<u8> = Vec::new();
/// let err = strict.transcode(&[0xDC00u16], &mut out).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::SurrogateCodePoint(0xDC00));
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub struct TranscodeOptions {
    /// Whether to reject code points in the surrogate range U+D800..=U+DFFF.
    ///
    /// By default a lone UTF-16 surrogate (one followed by a zero unit, or a
    /// low surrogate on its own) decodes to a code point equal to its own
    /// value, and such code points are accepted from UTF-8 and UTF-32 input
    /// as well. Enabling this restricts every conversion to Unicode scalar
    /// values and reports [`ErrorKind::SurrogateCodePoint`] instead.
    ///
    /// [`ErrorKind::SurrogateCodePoint`]: crate::ErrorKind::SurrogateCodePoint
    ///
    /// # Default
    ///
    /// `false`
    pub reject_surrogate_code_points: bool,
}

impl TranscodeOptions {
    /// Options accepting only Unicode scalar values.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            reject_surrogate_code_points: true,
        }
    }
}
