// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Merge a flat directory of images into one multi-page PDF, one image per
// page, in natural file-name order.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use pagetint_core::config::MergeConfig;
use pagetint_core::error::{PagetintError, Result};
use tracing::{debug, info, instrument};

use super::natural_sort::sort_by_file_name;
use crate::image::ImageProcessor;
use crate::listing::list_images;
use crate::pdf::PdfWriter;

/// Collects, orders, and concatenates images into a PDF.
#[derive(Debug, Clone, Default)]
pub struct NaturalOrderAggregator {
    config: MergeConfig,
}

impl NaturalOrderAggregator {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Qualifying files in `input_dir`, in page order.
    ///
    /// Files are sorted by raw name first so that ties in the natural key
    /// come out the same regardless of directory listing order.
    pub fn collect(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = list_images(input_dir, &self.config.extensions)?;
        sort_by_file_name(&mut files);
        Ok(files)
    }

    /// Decode `files` in order, normalised to RGB.
    ///
    /// The first file that fails to decode aborts the whole sequence.
    pub fn load_sequence(&self, files: &[PathBuf]) -> Result<Vec<RgbImage>> {
        files
            .iter()
            .map(|path| {
                let image = ImageProcessor::open(path)?.into_rgb8();
                debug!(path = %path.display(), "Page image loaded");
                Ok(image)
            })
            .collect()
    }

    /// Write every qualifying image in `input_dir` to `output_path` as one
    /// PDF and return the page count.
    ///
    /// Fails with [`PagetintError::EmptyInput`] when nothing qualifies; no
    /// file is written on any failure.
    #[instrument(skip_all, fields(input = %input_dir.display(), output = %output_path.display()))]
    pub fn merge(&self, input_dir: &Path, output_path: &Path) -> Result<usize> {
        let files = self.collect(input_dir)?;
        if files.is_empty() {
            return Err(PagetintError::EmptyInput(input_dir.display().to_string()));
        }
        info!(files = files.len(), "Merging images into PDF");

        let pages = self.load_sequence(&files)?;

        let mut writer = PdfWriter::new(self.config.page_dpi);
        if let Some(stem) = input_dir.file_name() {
            writer.set_title(stem.to_string_lossy());
        }
        let bytes = writer.create_from_images(&pages)?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| {
                PagetintError::Write(format!("failed to create {}: {}", parent.display(), err))
            })?;
        }
        fs::write(output_path, &bytes).map_err(|err| {
            PagetintError::Write(format!("{}: {}", output_path.display(), err))
        })?;

        info!(pages = pages.len(), bytes = bytes.len(), "PDF written");
        Ok(pages.len())
    }
}
