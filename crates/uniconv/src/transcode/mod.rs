//! Sequence level transcoding.
//!
//! A conversion walks the source once, left to right. At each position the
//! lead unit fixes the group length (see [`Encoding::group_len`]), the group
//! is decoded to a [`CodePoint`] and re-encoded into the destination. The walk
//! stops at the first malformed group; nothing is skipped or replaced.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::{
    CodePoint, ErrorKind, TranscodeError, TranscodeOptions,
    encoding::{CodeUnit, Encoding, Utf8, Utf16, Utf32},
};


/// Converts sequences between encodings according to a fixed set of
/// [`TranscodeOptions`].
///
/// `Transcoder::default()` behaves exactly like the free functions
/// ([`utf8_to_utf16`] and friends).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transcoder {
    options: TranscodeOptions,
}

impl Transcoder {
    /// Creates a transcoder with the given options.
    #[must_use]
    pub const fn new(options: TranscodeOptions) -> Self {
        Self { options }
    }

    /// The options this transcoder was built with.
    #[must_use]
    pub const fn options(&self) -> TranscodeOptions {
        self.options
    }

    /// Appends the conversion of `src` to `dst`.
    ///
    /// The source and destination encodings follow from the unit types, e.g.
    /// `&[u8]` into `Vec<u16>` is UTF-8 to UTF-16. When both sides use the
    /// same encoding the source is validated and copied.
    ///
    /// # Errors
    ///
    /// Returns the first malformed group in `src`. `dst` is then truncated
    /// back to the length it had on entry.
    pub fn transcode<S: CodeUnit, D: CodeUnit>(
        &self,
        src: &[S],
        dst: &mut Vec<D>,
    ) -> Result<(), TranscodeError> {
        let start = dst.len();
        let result = self.append(src, dst);
        if result.is_err() {
            dst.truncate(start);
        }
        result
    }

    /// Converts `src` into a freshly allocated vector.
    ///
    /// # Errors
    ///
    /// Returns the first malformed group in `src`.
    pub fn transcode_to_vec<S: CodeUnit, D: CodeUnit>(
        &self,
        src: &[S],
    ) -> Result<Vec<D>, TranscodeError> {
        let mut dst = Vec::new();
        self.append(src, &mut dst)?;
        Ok(dst)
    }

    /// Iterates over the code points of `src`.
    #[must_use]
    pub fn code_points<'a, S: CodeUnit>(&self, src: &'a [S]) -> CodePoints<'a, S> {
        CodePoints {
            src,
            pos: 0,
            options: self.options,
            failed: false,
        }
    }

    fn append<S: CodeUnit, D: CodeUnit>(
        &self,
        src: &[S],
        dst: &mut Vec<D>,
    ) -> Result<(), TranscodeError> {
        dst.reserve(src.len());
        for cp in self.code_points(src) {
            let group = D::Encoding::encode(cp?);
            dst.extend(group.as_ref().iter().map(|&unit| D::from_raw(unit)));
        }
        Ok(())
    }
}

/// Iterator over the code points of an encoded sequence.
///
/// Yields `Err` for the first malformed group and then ends.
///
/// Created by [`Transcoder::code_points`] or [`code_points`].
#[derive(Debug, Clone)]
pub struct CodePoints<'a, S> {
    src: &'a [S],
    pos: usize,
    options: TranscodeOptions,
    failed: bool,
}

impl<S: CodeUnit> CodePoints<'_, S> {
    /// Index into the source of the next group to be decoded.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn decode_group(&self, rest: &[S]) -> Result<(CodePoint, usize), ErrorKind> {
        let lead = rest[0].into_raw();
        let len = S::Encoding::group_len(lead)?;
        let units = rest.get(..len).ok_or(ErrorKind::TruncatedSequence)?;

        let mut raw = [<S::Encoding as Encoding>::Unit::default(); 4];
        debug_assert!(len <= S::Encoding::MAX_GROUP_LEN);
        for (slot, unit) in raw.iter_mut().zip(units) {
            *slot = unit.into_raw();
        }

        let cp = S::Encoding::decode(&raw[..len])?;
        if self.options.reject_surrogate_code_points && cp.is_surrogate() {
            return Err(ErrorKind::SurrogateCodePoint(cp.to_u32()));
        }
        Ok((cp, len))
    }
}

impl<S: CodeUnit> Iterator for CodePoints<'_, S> {
    type Item = Result<CodePoint, TranscodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let rest = self.src.get(self.pos..).filter(|rest| !rest.is_empty())?;
        match self.decode_group(rest) {
            Ok((cp, len)) => {
                self.pos += len;
                Some(Ok(cp))
            }
            Err(kind) => {
                self.failed = true;
                Some(Err(TranscodeError::new(kind, self.pos)))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.src.len() - self.pos;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl<S: CodeUnit> FusedIterator for CodePoints<'_, S> {}

/// Appends the conversion of `src` to `dst` with default options.
///
/// See [`Transcoder::transcode`].
///
/// # Errors
///
/// Returns the first malformed group in `src`; `dst` is left as it was.
pub fn transcode<S: CodeUnit, D: CodeUnit>(
    src: &[S],
    dst: &mut Vec<D>,
) -> Result<(), TranscodeError> {
    Transcoder::default().transcode(src, dst)
}

/// Iterates over the code points of `src` with default options.
#[must_use]
pub fn code_points<S: CodeUnit>(src: &[S]) -> CodePoints<'_, S> {
    Transcoder::default().code_points(src)
}

macro_rules! directional {
    ($($(#[$doc:meta])* $name:ident: $from:ty => $to:ty;)*) => {$(
        $(#[$doc])*
        ///
        /// # Errors
        ///
        /// Returns the first malformed group in `src`; `dst` is left as it
        /// was.
        pub fn $name<S, D>(src: &[S], dst: &mut Vec<D>) -> Result<(), TranscodeError>
        where
            S: CodeUnit<Encoding = $from>,
            D: CodeUnit<Encoding = $to>,
        {
            transcode(src, dst)
        }
    )*};
}

directional! {
    /// Appends the UTF-16 form of the UTF-8 `src` to `dst`.
    utf8_to_utf16: Utf8 => Utf16;
    /// Appends the UTF-32 form of the UTF-8 `src` to `dst`.
    utf8_to_utf32: Utf8 => Utf32;
    /// Appends the UTF-8 form of the UTF-16 `src` to `dst`.
    ///
    /// A high surrogate pairs with the unit after it; a lone surrogate
    /// followed by a zero unit, or a lone low surrogate, becomes a code point
    /// equal to its own value.
    utf16_to_utf8: Utf16 => Utf8;
    /// Appends the UTF-32 form of the UTF-16 `src` to `dst`.
    utf16_to_utf32: Utf16 => Utf32;
    /// Appends the UTF-8 form of the UTF-32 `src` to `dst`.
    utf32_to_utf8: Utf32 => Utf8;
    /// Appends the UTF-16 form of the UTF-32 `src` to `dst`.
    utf32_to_utf16: Utf32 => Utf16;
}

/// Method form of [`transcode`], picking the direction from the element types.
///
/// ```rust
/// use uniconv::Transcode;
///
/// let mut wide: Vec<u16> = Vec::new();
/// "é😀".as_bytes().transcode_into(&mut wide)?;
/// assert_eq!(wide, [0x00E9, 0xD83D, 0xDE00]);
/// # Ok::<(), uniconv::TranscodeError>(())
/// ```
pub trait Transcode<D> {
    /// Appends the converted contents of `self` to `dst`.
    ///
    /// # Errors
    ///
    /// Returns the first malformed group; `dst` is left as it was.
    fn transcode_into(&self, dst: &mut Vec<D>) -> Result<(), TranscodeError>;
}

impl<S: CodeUnit, D: CodeUnit> Transcode<D> for [S] {
    fn transcode_into(&self, dst: &mut Vec<D>) -> Result<(), TranscodeError> {
        transcode(self, dst)
    }
}
