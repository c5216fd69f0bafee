//! Benchmarks for decomposition, wrapping and printing of tagged text.
//!
//! Run with: cargo bench -p tagcell-text

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tagcell_render::buffer::Buffer;
use tagcell_render::cell::PackedRgba;
use tagcell_text::{Align, decompose, print, word_wrap};

// =============================================================================
// Test Data
// =============================================================================

/// Plain ASCII prose.
fn plain_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

/// Prose with a style tag every few words and an occasional escape.
fn tagged_text(len: usize) -> String {
    let words = ["[red]alpha", "beta", "[:blue]gamma", "[::b]delta[default]", "[x[]", "漢字"];
    let mut out = String::with_capacity(len + 16);
    let mut i = 0;
    while out.len() < len {
        out.push_str(words[i % words.len()]);
        out.push(' ');
        i += 1;
    }
    out
}

const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let plain = plain_text(size);
        let tagged = tagged_text(size);
        group.bench_with_input(BenchmarkId::new("plain", size), &plain, |b, text| {
            b.iter(|| decompose(black_box(text)).width())
        });
        group.bench_with_input(BenchmarkId::new("tagged", size), &tagged, |b, text| {
            b.iter(|| decompose(black_box(text)).width())
        });
    }
    group.finish();
}

fn bench_word_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_wrap");
    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let tagged = tagged_text(size);
        for width in [20, 80] {
            group.bench_with_input(
                BenchmarkId::new(format!("tagged_w{width}"), size),
                &tagged,
                |b, text| b.iter(|| word_wrap(black_box(text), width).len()),
            );
        }
    }
    group.finish();
}

fn bench_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("print");
    let line = tagged_text(200);
    let mut buf = Buffer::new(120, 1);
    for align in [Align::Left, Align::Center, Align::Right] {
        group.bench_function(format!("{align:?}"), |b| {
            b.iter(|| {
                print(
                    &mut buf,
                    black_box(&line),
                    0,
                    0,
                    120,
                    align,
                    PackedRgba::WHITE,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decompose, bench_word_wrap, bench_print);
criterion_main!(benches);
