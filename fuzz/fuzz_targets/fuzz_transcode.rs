#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use uniconv::{TranscodeOptions, Transcoder};

#[derive(Debug, Arbitrary)]
struct Input {
    options: TranscodeOptions,
    bytes: Vec<u8>,
    wide: Vec<u16>,
}

fn check_bytes(transcoder: Transcoder, bytes: &[u8]) {
    let utf32 = transcoder.transcode_to_vec::<u8, u32>(bytes);

    // Strict UTF-8 validation is exactly core's.
    if transcoder.options().reject_surrogate_code_points {
        match core::str::from_utf8(bytes) {
            Ok(s) => {
                let expected: Vec<u32> = s.chars().map(u32::from).collect();
                assert_eq!(utf32.as_ref().ok(), Some(&expected));
            }
            Err(e) => {
                let err = utf32.as_ref().expect_err("core rejected the input");
                assert_eq!(err.offset(), e.valid_up_to());
            }
        }
    }

    let Ok(utf32) = utf32 else { return };

    // Anything accepted re-encodes to the identical bytes.
    let utf16: Vec<u16> = transcoder.transcode_to_vec(bytes).expect("accepted once");
    let back: Vec<u8> = transcoder.transcode_to_vec(&utf32).expect("decoded values encode");
    assert_eq!(back, bytes);

    // Lone surrogates need not survive a trip through UTF-16.
    if !utf32.iter().any(|&cp| (0xD800..0xE000).contains(&cp)) {
        let via_utf16: Vec<u32> = transcoder.transcode_to_vec(&utf16).expect("scalar values");
        assert_eq!(via_utf16, utf32);
    }
}

fn check_wide(transcoder: Transcoder, wide: &[u16]) {
    let mut dst: Vec<u8> = b"prefix".to_vec();
    match transcoder.transcode(wide, &mut dst) {
        Ok(()) => {
            let direct: Vec<u32> = transcoder.transcode_to_vec(wide).expect("same source");
            let routed: Vec<u32> = transcoder
                .transcode_to_vec(&dst[b"prefix".len()..])
                .expect("own output decodes");
            assert_eq!(direct, routed);
        }
        Err(err) => {
            assert!(err.offset() < wide.len());
            assert_eq!(dst, b"prefix");
        }
    }
}

fuzz_target!(|input: Input| {
    let transcoder = Transcoder::new(input.options);
    check_bytes(transcoder, &input.bytes);
    check_wide(transcoder, &input.wide);
});
