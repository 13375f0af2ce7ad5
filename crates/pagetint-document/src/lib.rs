// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pagetint-document — Image and PDF operations for pagetint.
//
// Provides exact-match color remapping over directory trees, color inversion,
// natural-order merging of images into a multi-page PDF, and PDF
// rasterization through an external tool.

pub mod image;
pub mod listing;
pub mod merge;
pub mod pdf;

// Re-export the primary structs so callers can use `pagetint_document::ColorRemapper` etc.
pub use crate::image::invert::ColorInverter;
pub use crate::image::processor::ImageProcessor;
pub use crate::image::remap::{ColorRemapper, remap};
pub use merge::aggregator::NaturalOrderAggregator;
pub use merge::natural_sort::NaturalSortKey;
pub use pdf::rasterize::PdfRasterizer;
pub use pdf::reader::PdfReader;
pub use pdf::writer::PdfWriter;
