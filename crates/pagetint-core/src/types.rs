// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: colors, pixel mappings, and batch reports.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "({r}, {g}, {b})")
    }
}

/// A single exact-match replacement: every pixel equal to `source` becomes
/// `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMapping {
    pub source: Rgb,
    pub target: Rgb,
}

impl ColorMapping {
    pub const fn new(source: Rgb, target: Rgb) -> Self {
        Self { source, target }
    }
}

/// Ordered set of exact-match color replacements.
///
/// Each pixel is matched against its original value only, so a pixel that
/// one mapping rewrites is never picked up by a later mapping in the same
/// pass. When several mappings share a source color the first one wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PixelMapping(Vec<ColorMapping>);

impl PixelMapping {
    pub fn new(mappings: Vec<ColorMapping>) -> Self {
        Self(mappings)
    }

    pub fn mappings(&self) -> &[ColorMapping] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replacement for `pixel`, or `None` if no mapping matches it.
    pub fn lookup(&self, pixel: Rgb) -> Option<Rgb> {
        self.0
            .iter()
            .find(|mapping| mapping.source == pixel)
            .map(|mapping| mapping.target)
    }

    /// True when some target color is also a source color. Applying such a
    /// mapping twice changes the result of the first pass.
    pub fn has_collisions(&self) -> bool {
        self.0
            .iter()
            .any(|outer| self.0.iter().any(|inner| inner.source == outer.target))
    }
}

impl Default for PixelMapping {
    /// White to (255, 223, 63) and black to (31, 77, 120).
    fn default() -> Self {
        Self(vec![
            ColorMapping::new(Rgb::WHITE, Rgb::new(255, 223, 63)),
            ColorMapping::new(Rgb::BLACK, Rgb::new(31, 77, 120)),
        ])
    }
}

/// Outcome of a batch operation over many files.
///
/// Per-file failures do not abort a batch; they are collected here so the
/// caller can show both the success count and what was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of files written successfully.
    pub processed: usize,
    /// Files that were skipped, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn record_success(&mut self) {
        self.processed += 1;
    }

    pub fn record_failure(&mut self, path: PathBuf, reason: impl Into<String>) {
        self.failed.push((path, reason.into()));
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
