// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Exact-match color remapping for single images and whole directory trees.
//
// A tree is mirrored into an output root. When that root lives inside the
// input tree it is pruned from the walk, otherwise a second run would feed
// already-converted images back through the mapping.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};
use pagetint_core::config::{RemapConfig, has_extension};
use pagetint_core::error::{PagetintError, Result};
use pagetint_core::{BatchReport, PixelMapping, Rgb};
use tracing::{debug, info, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use super::processor::ImageProcessor;

/// Rewrite `image` in place, replacing pixels that exactly match a source color.
///
/// Every pixel is looked up by its original value, so a replacement is never
/// matched again within the same pass.
pub fn remap_rgb(image: &mut RgbImage, mapping: &PixelMapping) {
    if mapping.is_empty() {
        return;
    }
    for pixel in image.pixels_mut() {
        if let Some(target) = mapping.lookup(Rgb(pixel.0)) {
            pixel.0 = target.0;
        }
    }
}

/// Normalise `image` to RGB and apply `mapping`.
pub fn remap(image: DynamicImage, mapping: &PixelMapping) -> RgbImage {
    ImageProcessor::from_dynamic(image)
        .remap_colors(mapping)
        .into_rgb8()
}

/// Applies a [`PixelMapping`] to files and directory trees.
#[derive(Debug, Clone, Default)]
pub struct ColorRemapper {
    config: RemapConfig,
}

impl ColorRemapper {
    pub fn new(config: RemapConfig) -> Self {
        Self { config }
    }

    /// Remap one file. With no `output` the source file is overwritten.
    #[instrument(skip_all, fields(input = %input.display()))]
    pub fn remap_file(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        let output = output.unwrap_or(input);
        ImageProcessor::open(input)?
            .remap_colors(&self.config.mappings)
            .save(output)?;
        debug!(output = %output.display(), "Image remapped");
        Ok(())
    }

    /// Remap every matching image under `input_dir` into a mirrored tree.
    ///
    /// `output_dir` defaults to `<input_dir>/<output_dir_name>`. Files that
    /// fail to decode or write are logged and listed in the report; the walk
    /// carries on with the rest.
    #[instrument(skip_all, fields(input = %input_dir.display()))]
    pub fn remap_tree(&self, input_dir: &Path, output_dir: Option<&Path>) -> Result<BatchReport> {
        if !input_dir.is_dir() {
            return Err(PagetintError::InvalidInput(format!(
                "{} is not a directory",
                input_dir.display()
            )));
        }

        let output_dir = output_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.default_output_dir(input_dir));
        fs::create_dir_all(&output_dir).map_err(|err| {
            PagetintError::Write(format!("failed to create {}: {}", output_dir.display(), err))
        })?;

        // Canonical paths keep `..` segments and symlinked roots from
        // defeating the prefix check.
        let input_root = input_dir.canonicalize()?;
        let output_root = output_dir.canonicalize()?;
        info!(
            input = %input_root.display(),
            output = %output_root.display(),
            "Remapping directory tree"
        );
        if input_root.starts_with(&output_root) {
            warn!(
                input = %input_root.display(),
                output = %output_root.display(),
                "Input tree lies inside the output directory; nothing will be remapped"
            );
        }

        let mut report = BatchReport::default();
        let walker = WalkDir::new(&input_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !entry.path().starts_with(&output_root));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    warn!(path = %path.display(), error = %err, "Skipping unreadable entry");
                    report.record_failure(path, err.to_string());
                    continue;
                }
            };
            if !is_regular_file(&entry) || !has_extension(entry.path(), &self.config.extensions) {
                continue;
            }

            let target = mirrored_path(&input_root, &output_root, entry.path());
            match self.remap_into(entry.path(), &target) {
                Ok(()) => {
                    report.record_success();
                    debug!(
                        processed = report.processed,
                        output = %target.display(),
                        "Remapped"
                    );
                }
                Err(err) => {
                    warn!(path = %entry.path().display(), error = %err, "Skipping image");
                    report.record_failure(entry.path().to_path_buf(), err.to_string());
                }
            }
        }

        info!(
            processed = report.processed,
            failed = report.failed.len(),
            "Remap complete"
        );
        Ok(report)
    }

    fn remap_into(&self, input: &Path, target: &Path) -> Result<()> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                PagetintError::Write(format!("failed to create {}: {}", parent.display(), err))
            })?;
        }
        self.remap_file(input, Some(target))
    }
}

/// Symlinked files count as files; symlinked directories are never descended.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Location of `file` (somewhere under `input_root`) inside `output_root`.
fn mirrored_path(input_root: &Path, output_root: &Path, file: &Path) -> PathBuf {
    match file.strip_prefix(input_root) {
        Ok(relative) => output_root.join(relative),
        Err(_) => output_root.join(file.file_name().unwrap_or_default()),
    }
}
