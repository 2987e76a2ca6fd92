//! Benchmark – the six directional conversions over text of varying width.
#![allow(missing_docs)]

use std::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use uniconv::{
    TranscodeOptions, Transcoder, utf8_to_utf16, utf8_to_utf32, utf16_to_utf8, utf16_to_utf32,
    utf32_to_utf8, utf32_to_utf16,
};

const SAMPLES: &[(&str, &str)] = &[
    ("ascii", "The quick brown fox jumps over the lazy dog. "),
    ("latin", "Ça fait déjà trop longtemps, Ölfässer über Brücken. "),
    ("cjk", "日本語の文章を変換するベンチマークです。"),
    ("emoji", "😀🎉🚀🌍🦀✨"),
];

/// Repeat `unit` until the result is at least `target_len` bytes.
fn make_text(unit: &str, target_len: usize) -> String {
    let reps = target_len.div_ceil(unit.len());
    unit.repeat(reps)
}

fn bench_from_utf8(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_utf8");
    for &(name, unit) in SAMPLES {
        let text = make_text(unit, 64 * 1024);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("utf16", name), &text, |b, text| {
            let mut dst: Vec<u16> = Vec::with_capacity(text.len());
            b.iter(|| {
                dst.clear();
                utf8_to_utf16(black_box(text.as_bytes()), &mut dst).unwrap();
                black_box(dst.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("utf32", name), &text, |b, text| {
            let mut dst: Vec<u32> = Vec::with_capacity(text.len());
            b.iter(|| {
                dst.clear();
                utf8_to_utf32(black_box(text.as_bytes()), &mut dst).unwrap();
                black_box(dst.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("utf32_strict", name), &text, |b, text| {
            let strict = Transcoder::new(TranscodeOptions::strict());
            let mut dst: Vec<u32> = Vec::with_capacity(text.len());
            b.iter(|| {
                dst.clear();
                strict.transcode(black_box(text.as_bytes()), &mut dst).unwrap();
                black_box(dst.len());
            });
        });
    }
    group.finish();
}

fn bench_from_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_wide");
    for &(name, unit) in SAMPLES {
        let text = make_text(unit, 64 * 1024);
        let utf16: Vec<u16> = text.encode_utf16().collect();
        let utf32: Vec<u32> = text.chars().map(u32::from).collect();
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("utf16_to_utf8", name), &utf16, |b, src| {
            let mut dst: Vec<u8> = Vec::with_capacity(text.len());
            b.iter(|| {
                dst.clear();
                utf16_to_utf8(black_box(src), &mut dst).unwrap();
                black_box(dst.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("utf16_to_utf32", name), &utf16, |b, src| {
            let mut dst: Vec<u32> = Vec::with_capacity(src.len());
            b.iter(|| {
                dst.clear();
                utf16_to_utf32(black_box(src), &mut dst).unwrap();
                black_box(dst.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("utf32_to_utf8", name), &utf32, |b, src| {
            let mut dst: Vec<u8> = Vec::with_capacity(text.len());
            b.iter(|| {
                dst.clear();
                utf32_to_utf8(black_box(src), &mut dst).unwrap();
                black_box(dst.len());
            });
        });
        group.bench_with_input(BenchmarkId::new("utf32_to_utf16", name), &utf32, |b, src| {
            let mut dst: Vec<u16> = Vec::with_capacity(utf16.len());
            b.iter(|| {
                dst.clear();
                utf32_to_utf16(black_box(src), &mut dst).unwrap();
                black_box(dst.len());
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(5))
            .measurement_time(Duration::from_secs(10));
    }
    c
}

criterion_group! {
    name = benches;
    config = criterion();
    targets = bench_from_utf8, bench_from_wide
}
criterion_main!(benches);
