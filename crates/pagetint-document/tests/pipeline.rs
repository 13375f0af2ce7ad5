// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end: recolor a tree of rendered pages, then merge the converted
// pages into one PDF.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use pagetint_core::AppConfig;
use pagetint_document::{ColorRemapper, NaturalOrderAggregator, PdfReader};

fn page(width: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, 20, Rgb([255, 255, 255]));
    for x in 0..width {
        img.put_pixel(x, 10, Rgb([0, 0, 0]));
    }
    img
}

fn write(path: &Path, img: &RgbImage) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    img.save(path).unwrap();
}

#[test]
fn recolor_then_merge() {
    let dir = tempfile::tempdir().unwrap();
    let book = dir.path().join("book");
    for (i, width) in [(1, 11), (2, 12), (10, 20)] {
        write(&book.join(format!("chapter/page_{i}.png")), &page(width));
    }

    let config = AppConfig::default();
    let report = ColorRemapper::new(config.remap.clone())
        .remap_tree(&book, None)
        .unwrap();
    assert_eq!(report.processed, 3);

    let converted = book.join("color_converted/chapter");
    let recolored = image::open(converted.join("page_2.png")).unwrap().to_rgb8();
    assert_eq!(recolored.get_pixel(0, 0).0, [255, 223, 63]);
    assert_eq!(recolored.get_pixel(0, 10).0, [31, 77, 120]);

    let output = dir.path().join("book.pdf");
    let pages = NaturalOrderAggregator::new(config.merge.clone())
        .merge(&converted, &output)
        .unwrap();
    assert_eq!(pages, 3);

    let reader = PdfReader::open(&output).unwrap();
    assert_eq!(reader.page_count(), 3);
    let widths: Vec<f32> = reader
        .page_sizes()
        .unwrap()
        .into_iter()
        .map(|(w, _)| w)
        .collect();
    for (actual, expected) in widths.iter().zip([11.0, 12.0, 20.0]) {
        assert!((actual - expected).abs() < 0.5, "{actual} != {expected}");
    }
}

#[test]
fn custom_output_dir_name_is_respected() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("a.png"), &page(4));

    let mut config = AppConfig::default();
    config.remap.output_dir_name = "recolored".into();

    let report = ColorRemapper::new(config.remap)
        .remap_tree(dir.path(), None)
        .unwrap();

    assert_eq!(report.processed, 1);
    assert!(dir.path().join("recolored/a.png").is_file());
    assert!(!dir.path().join("color_converted").exists());
}
