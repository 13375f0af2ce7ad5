// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — decode (format sniffed from content), recolor, invert,
// and save a single in-memory image using the `image` crate.

use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader, RgbImage};
use pagetint_core::PixelMapping;
use pagetint_core::error::PagetintError;
use tracing::{debug, instrument};

use super::invert::invert_rgb;
use super::remap::remap_rgb;

/// Image processing pipeline operating on a single in-memory image.
///
/// Each transformation consumes `self` and returns a new `ImageProcessor`,
/// enabling method chaining.
///
/// ```ignore
/// ImageProcessor::open("page_1.png")?
///     .remap_colors(&PixelMapping::default())
///     .save("out/page_1.png")?;
/// ```
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    ///
    /// The decoder is chosen from the file's leading bytes, falling back to
    /// the extension, so a JPEG saved as `.png` still opens.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PagetintError> {
        let path = path.as_ref();
        let decode_err = |err: &dyn std::fmt::Display| {
            PagetintError::Decode(format!("{}: {}", path.display(), err))
        };
        let img = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| decode_err(&err))?
            .decode()
            .map_err(|err| decode_err(&err))?;
        debug!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image loaded"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Consume the processor and return the image as 8-bit RGB.
    pub fn into_rgb8(self) -> RgbImage {
        to_rgb8(self.image)
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Replace every pixel exactly equal to a mapping's source color.
    pub fn remap_colors(self, mapping: &PixelMapping) -> Self {
        let mut rgb = to_rgb8(self.image);
        remap_rgb(&mut rgb, mapping);
        Self {
            image: DynamicImage::ImageRgb8(rgb),
        }
    }

    /// Invert every channel of the RGB-normalised image.
    pub fn invert(self) -> Self {
        let mut rgb = to_rgb8(self.image);
        invert_rgb(&mut rgb);
        Self {
            image: DynamicImage::ImageRgb8(rgb),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Write the image to a file. The format is inferred from the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PagetintError> {
        let path = path.as_ref();
        self.image.save(path).map_err(|err| match err {
            ImageError::IoError(io) => {
                PagetintError::Write(format!("{}: {}", path.display(), io))
            }
            other => PagetintError::Encode(format!("{}: {}", path.display(), other)),
        })
    }
}

/// Take ownership of the RGB buffer when the image already is one, convert
/// otherwise. Alpha is dropped, not composited; palette, grayscale, and
/// 16-bit images are expanded or narrowed.
fn to_rgb8(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    }
}
