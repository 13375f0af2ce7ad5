// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the pagetint-document crate: per-pixel color
// remapping and natural ordering of file names.

use std::path::PathBuf;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};

use pagetint_core::PixelMapping;
use pagetint_document::merge::natural_sort::sort_by_file_name;
use pagetint_document::remap;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Remap a 512x512 page that is a mix of white background, black text, and
/// gray anti-aliasing, roughly what a rendered document page looks like.
fn bench_remap(c: &mut Criterion) {
    let page = RgbImage::from_fn(512, 512, |x, y| match (x + y) % 7 {
        0 => Rgb([0, 0, 0]),
        1 => Rgb([128, 128, 128]),
        _ => Rgb([255, 255, 255]),
    });
    let dynamic = DynamicImage::ImageRgb8(page);
    let mapping = PixelMapping::default();

    c.bench_function("remap default mapping (512x512)", |b| {
        b.iter(|| black_box(remap(black_box(dynamic.clone()), &mapping)));
    });
}

/// Natural sort of 1000 shuffled page file names.
fn bench_natural_sort(c: &mut Criterion) {
    let names: Vec<PathBuf> = (0..1000u32)
        .map(|i| PathBuf::from(format!("scan_{}_page{}.png", (i * 7919) % 13, (i * 104_729) % 1000)))
        .collect();

    c.bench_function("natural sort (1000 names)", |b| {
        b.iter(|| {
            let mut paths = black_box(names.clone());
            sort_by_file_name(&mut paths);
            black_box(paths);
        });
    });
}

criterion_group!(benches, bench_remap, bench_natural_sort);
criterion_main!(benches);
