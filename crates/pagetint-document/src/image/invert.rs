// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Color inversion for a flat directory of images.

use std::fs;
use std::path::Path;

use image::RgbImage;
use pagetint_core::BatchReport;
use pagetint_core::config::InvertConfig;
use pagetint_core::error::{PagetintError, Result};
use tracing::{debug, info, instrument, warn};

use super::processor::ImageProcessor;
use crate::listing::list_images;

/// Invert every channel in place.
pub fn invert_rgb(pixels: &mut RgbImage) {
    image::imageops::invert(pixels);
}

/// Writes negatives of every image in a directory.
#[derive(Debug, Clone, Default)]
pub struct ColorInverter {
    config: InvertConfig,
}

impl ColorInverter {
    pub fn new(config: InvertConfig) -> Self {
        Self { config }
    }

    /// Invert the images directly inside `input_dir` (sub-directories are not
    /// searched). Each result is saved as `<file_prefix><name>` in
    /// `output_dir`, which defaults to `<input_dir>/<output_dir_name>`.
    #[instrument(skip_all, fields(input = %input_dir.display()))]
    pub fn invert_dir(&self, input_dir: &Path, output_dir: Option<&Path>) -> Result<BatchReport> {
        let files = list_images(input_dir, &self.config.extensions)?;

        let output_dir = output_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.default_output_dir(input_dir));
        fs::create_dir_all(&output_dir).map_err(|err| {
            PagetintError::Write(format!("failed to create {}: {}", output_dir.display(), err))
        })?;

        info!(
            files = files.len(),
            output = %output_dir.display(),
            "Inverting images"
        );

        let mut report = BatchReport::default();
        for path in files {
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                warn!(path = %path.display(), "Skipping file with non UTF-8 name");
                report.record_failure(path.clone(), "file name is not valid UTF-8");
                continue;
            };
            let target = output_dir.join(format!("{}{}", self.config.file_prefix, name));

            let result = ImageProcessor::open(&path).and_then(|img| img.invert().save(&target));
            match result {
                Ok(()) => {
                    report.record_success();
                    debug!(output = %target.display(), "Inverted");
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Skipping image");
                    report.record_failure(path, err.to_string());
                }
            }
        }

        info!(
            processed = report.processed,
            failed = report.failed.len(),
            "Inversion complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn invert_flips_each_channel() {
        let mut img = RgbImage::from_pixel(1, 1, Rgb([0, 100, 255]));
        invert_rgb(&mut img);
        assert_eq!(img.get_pixel(0, 0).0, [255, 155, 0]);
    }

    #[test]
    fn directory_is_inverted_with_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path();
        RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]))
            .save(input.join("a.png"))
            .unwrap();
        RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]))
            .save(input.join("b.BMP"))
            .unwrap();
        fs::write(input.join("readme.txt"), "ignored").unwrap();

        let report = ColorInverter::default().invert_dir(input, None).unwrap();

        assert_eq!(report.processed, 2);
        let out = input.join("inverted");
        let a = image::open(out.join("inverted_a.png")).unwrap().to_rgb8();
        assert_eq!(a.get_pixel(1, 1).0, [245, 235, 225]);
        assert!(out.join("inverted_b.BMP").is_file());
        assert!(!out.join("inverted_readme.txt").exists());
    }

    #[test]
    fn undecodable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("broken.gif"), b"GIF89a?").unwrap();
        RgbImage::new(1, 1).save(input.join("ok.png")).unwrap();
        let output = dir.path().join("out");

        let report = ColorInverter::default()
            .invert_dir(&input, Some(&output))
            .unwrap();

        assert_eq!(report.processed, 1);
        assert_eq!(report.failed.len(), 1);
        assert!(output.join("inverted_ok.png").is_file());
    }

    #[test]
    fn missing_directory_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = ColorInverter::default().invert_dir(&dir.path().join("missing"), None);
        assert!(matches!(result, Err(PagetintError::InvalidInput(_))));
    }
}
