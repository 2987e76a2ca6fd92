//! Conversions returning freshly allocated containers.

use alloc::{string::String, vec::Vec};

use bstr::BString;

use crate::{CodeUnit, TranscodeError, TranscodeOptions, Transcoder};

/// Converts any encoded sequence to UTF-16.
///
/// # Errors
///
/// Returns the first malformed group in `src`.
pub fn to_utf16<S: CodeUnit>(src: &[S]) -> Result<Vec<u16>, TranscodeError> {
    Transcoder::default().transcode_to_vec(src)
}

/// Converts any encoded sequence to UTF-32.
///
/// # Errors
///
/// Returns the first malformed group in `src`.
pub fn to_utf32<S: CodeUnit>(src: &[S]) -> Result<Vec<u32>, TranscodeError> {
    Transcoder::default().transcode_to_vec(src)
}

/// Converts any encoded sequence to UTF-8 bytes.
///
/// The result is a [`BString`] rather than a [`String`]: lone surrogates are
/// accepted and encoded like other code points, which is not valid `str`.
///
/// # Errors
///
/// Returns the first malformed group in `src`.
pub fn to_bstring<S: CodeUnit>(src: &[S]) -> Result<BString, TranscodeError> {
    Transcoder::default()
        .transcode_to_vec::<S, u8>(src)
        .map(BString::from)
}

/// Converts any encoded sequence to a `String`, rejecting surrogate code
/// points.
///
/// ```rust
/// let wide = [0x0068u16, 0x0069, 0xD83D, 0xDE00];
/// assert_eq!(uniconv::to_string(&wide)?, "hi😀");
///
/// let lone = [0xDC00u16];
/// assert!(uniconv::to_string(&lone).is_err());
/// # Ok::<(), uniconv::TranscodeError>(())
/// ```
///
/// # Errors
///
/// Returns the first malformed group in `src`, or
/// [`ErrorKind::SurrogateCodePoint`](crate::ErrorKind::SurrogateCodePoint) for
/// a surrogate.
pub fn to_string<S: CodeUnit>(src: &[S]) -> Result<String, TranscodeError> {
    let mut out = String::with_capacity(src.len());
    let mut code_points = Transcoder::new(TranscodeOptions::strict()).code_points(src);
    loop {
        let offset = code_points.offset();
        let Some(cp) = code_points.next() else {
            return Ok(out);
        };
        let ch = char::try_from(cp?).map_err(|kind| TranscodeError::new(kind, offset))?;
        out.push(ch);
    }
}
