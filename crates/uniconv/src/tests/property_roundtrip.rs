use alloc::{string::String, vec::Vec};

use quickcheck::{QuickCheck, TestResult};

use super::arbitrary::{AnyCodePoint, ScalarText};
use crate::{
    CodePoint, ErrorKind, TranscodeOptions, Transcoder,
    codec::{decode_utf8, decode_utf16, encode_utf8, encode_utf16},
    utf8_to_utf16, utf8_to_utf32, utf16_to_utf8, utf16_to_utf32, utf32_to_utf8, utf32_to_utf16,
};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: every scalar value decodes back from its own UTF-8 and UTF-16
/// groups. Surrogates are covered by `lone_surrogate_groups` instead.
#[test]
fn code_point_round_trips() {
    fn prop(cp: AnyCodePoint) -> TestResult {
        if cp.0.is_surrogate() {
            return TestResult::discard();
        }
        let value = cp.0.to_u32();
        let utf8 = encode_utf8(value).unwrap();
        let utf16 = encode_utf16(value).unwrap();
        let round_trips = decode_utf8(&utf8) == Ok(cp.0) && decode_utf16(&utf16) == Ok(cp.0);
        TestResult::from_bool(round_trips)
    }

    QuickCheck::new()
        .tests(test_count())
        .max_tests(2 * test_count())
        .quickcheck(prop as fn(AnyCodePoint) -> TestResult);
}

/// A surrogate encodes to a single UTF-16 unit. On its own, only a low
/// surrogate decodes back; a high one needs the zero unit after it.
#[test]
fn lone_surrogate_groups() {
    for value in [0xD800, 0xDBFF, 0xDC00, 0xDFFF] {
        let cp = CodePoint::from_u32(value).unwrap();
        let utf16 = encode_utf16(value).unwrap();
        assert_eq!(utf16.as_slice(), [u16::try_from(value).unwrap()]);
        assert_eq!(decode_utf8(&encode_utf8(value).unwrap()), Ok(cp));

        let expected = if value < 0xDC00 {
            Err(ErrorKind::TruncatedSequence)
        } else {
            Ok(cp)
        };
        assert_eq!(decode_utf16(&utf16), expected, "{cp:?}");
        assert_eq!(decode_utf16(&[utf16[0], 0]), Ok(cp), "{cp:?}");
    }
}

/// Property: scalar text survives UTF-8 -> UTF-16 -> UTF-32 -> UTF-8 and
/// every intermediate form matches the standard library's encoders.
#[test]
fn scalar_text_round_trips_through_all_encodings() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: ScalarText) -> bool {
        let text: String = text.0.into_iter().collect();

        let mut utf16: Vec<u16> = Vec::new();
        let mut utf32: Vec<u32> = Vec::new();
        let mut utf8: Vec<u8> = Vec::new();
        utf8_to_utf16(text.as_bytes(), &mut utf16).unwrap();
        utf16_to_utf32(&utf16, &mut utf32).unwrap();
        utf32_to_utf8(&utf32, &mut utf8).unwrap();

        let mut utf16_again: Vec<u16> = Vec::new();
        let mut utf32_again: Vec<u32> = Vec::new();
        let mut utf8_again: Vec<u8> = Vec::new();
        utf32_to_utf16(&utf32, &mut utf16_again).unwrap();
        utf8_to_utf32(&utf8, &mut utf32_again).unwrap();
        utf16_to_utf8(&utf16_again, &mut utf8_again).unwrap();

        utf8 == text.as_bytes()
            && utf8_again == text.as_bytes()
            && utf16 == text.encode_utf16().collect::<Vec<_>>()
            && utf16_again == utf16
            && utf32 == text.chars().map(u32::from).collect::<Vec<_>>()
            && utf32_again == utf32
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(ScalarText) -> bool);
}

/// Property: with surrogates rejected, UTF-8 validation agrees exactly with
/// `core::str::from_utf8`, including where the first error is reported.
#[test]
fn strict_utf8_matches_core_validation() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let strict = Transcoder::new(TranscodeOptions::strict());
        let ours = strict.transcode_to_vec::<u8, u32>(&bytes);
        match core::str::from_utf8(&bytes) {
            Ok(s) => ours == Ok(s.chars().map(u32::from).collect()),
            Err(e) => ours.is_err_and(|err| err.offset() == e.valid_up_to()),
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: with surrogates rejected, UTF-16 decoding agrees with
/// `char::decode_utf16`.
#[test]
fn strict_utf16_matches_core_decoding() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(units: Vec<u16>) -> bool {
        let strict = Transcoder::new(TranscodeOptions::strict());
        let ours = strict.transcode_to_vec::<u16, u32>(&units);
        let expected: Result<Vec<u32>, _> = char::decode_utf16(units.iter().copied())
            .map(|r| r.map(u32::from))
            .collect();
        ours.is_ok() == expected.is_ok() && ours.ok() == expected.ok()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}

/// Property: whatever permissive UTF-16 decoding accepts, including lone
/// surrogates, decodes to the same code points when routed through UTF-8.
#[test]
fn permissive_utf16_via_utf8_matches_direct() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(units: Vec<u16>) -> bool {
        let mut utf8: Vec<u8> = Vec::new();
        let mut direct: Vec<u32> = Vec::new();
        let via_utf8 = utf16_to_utf8(&units, &mut utf8);
        let direct_result = utf16_to_utf32(&units, &mut direct);
        if via_utf8.is_err() || direct_result.is_err() {
            return via_utf8 == direct_result && utf8.is_empty() && direct.is_empty();
        }

        let mut routed: Vec<u32> = Vec::new();
        utf8_to_utf32(&utf8, &mut routed).unwrap();
        direct == routed
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}
