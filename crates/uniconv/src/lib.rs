//! Validating conversion between UTF-8, UTF-16 and UTF-32.
//!
//! Two layers:
//!
//! - [`codec`] converts a single unit-group: decode a UTF-8 or UTF-16 group
//!   to a [`CodePoint`], encode a code point back.
//! - The sequence functions ([`utf8_to_utf16`], [`transcode`], ...) walk a
//!   whole input, append the converted units to a caller-owned `Vec`, and stop
//!   at the first malformed group.
//!
//! ```rust
//! let mut wide: Vec<u16> = Vec::new();
//! uniconv::utf8_to_utf16(&[0xC3u8, 0xA9], &mut wide)?;
//! assert_eq!(wide, [0x00E9]);
//!
//! let mut bytes: Vec<u8> = Vec::new();
//! let err = uniconv::utf16_to_utf8(&[0x0041u16, 0xD800], &mut bytes).unwrap_err();
//! assert_eq!(err.kind(), uniconv::ErrorKind::TruncatedSequence);
//! assert_eq!(err.offset(), 1);
//! assert!(bytes.is_empty());
//! # Ok::<(), uniconv::TranscodeError>(())
//! ```
//!
//! Lone UTF-16 surrogates followed by a zero unit, and lone low surrogates,
//! are accepted and decode to their own value. Use a [`Transcoder`] built with
//! [`TranscodeOptions::strict`] to reject every surrogate code point instead.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod code_point;
pub mod codec;
mod convert;
mod encoding;
mod error;
mod options;
mod transcode;

#[cfg(test)]
mod tests;

pub use code_point::CodePoint;
pub use convert::{to_bstring, to_string, to_utf16, to_utf32};
pub use encoding::{CodeUnit, Encoding, Utf8, Utf16, Utf32};
pub use error::{ErrorKind, TranscodeError};
pub use options::TranscodeOptions;
pub use transcode::{
    CodePoints, Transcode, Transcoder, code_points, transcode, utf8_to_utf16, utf8_to_utf32,
    utf16_to_utf8, utf16_to_utf32, utf32_to_utf8, utf32_to_utf16,
};
