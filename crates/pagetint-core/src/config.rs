// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.
//
// Every default that used to be baked into the tool (output folder names,
// accepted extensions, the rasterizer binary) lives here so it can be
// overridden from a JSON file or the command line.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PagetintError, Result};
use crate::types::PixelMapping;

/// Persistent application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub remap: RemapConfig,
    pub merge: MergeConfig,
    pub invert: InvertConfig,
    pub rasterize: RasterizeConfig,
}

/// Settings for recursive color remapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemapConfig {
    /// Replacement table applied to every image.
    pub mappings: PixelMapping,
    /// File extensions (without the dot, case-insensitive) that are remapped.
    pub extensions: Vec<String>,
    /// Name of the output directory created under the input root when no
    /// explicit output is given.
    pub output_dir_name: String,
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            mappings: PixelMapping::default(),
            extensions: vec!["png".into()],
            output_dir_name: "color_converted".into(),
        }
    }
}

impl RemapConfig {
    /// Output root used when the caller does not supply one.
    pub fn default_output_dir(&self, input_dir: &Path) -> PathBuf {
        input_dir.join(&self.output_dir_name)
    }
}

/// Settings for merging a directory of images into one PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    pub extensions: Vec<String>,
    /// File name used under the input directory when no output is given.
    pub output_file_name: String,
    /// Resolution used to size each page from its image (72 = one pixel per
    /// point).
    pub page_dpi: f32,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["png".into(), "jpg".into(), "jpeg".into(), "bmp".into()],
            output_file_name: "merged.pdf".into(),
            page_dpi: 72.0,
        }
    }
}

impl MergeConfig {
    pub fn default_output_path(&self, input_dir: &Path) -> PathBuf {
        input_dir.join(&self.output_file_name)
    }
}

/// Settings for color inversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvertConfig {
    pub extensions: Vec<String>,
    pub output_dir_name: String,
    /// Prefix prepended to every inverted file name.
    pub file_prefix: String,
}

impl Default for InvertConfig {
    fn default() -> Self {
        Self {
            extensions: vec![
                "png".into(),
                "jpg".into(),
                "jpeg".into(),
                "bmp".into(),
                "gif".into(),
            ],
            output_dir_name: "inverted".into(),
            file_prefix: "inverted_".into(),
        }
    }
}

impl InvertConfig {
    pub fn default_output_dir(&self, input_dir: &Path) -> PathBuf {
        input_dir.join(&self.output_dir_name)
    }
}

/// Settings for the external PDF rasterizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterizeConfig {
    /// Rasterizer executable. A bare name is resolved through `PATH`.
    pub program: PathBuf,
    /// Render resolution in dots per inch.
    pub dpi: u32,
}

impl Default for RasterizeConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("pdftoppm"),
            dpi: 200,
        }
    }
}

impl AppConfig {
    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&data)?;
        config.validate()?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Write settings to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Reject settings that would make an operation meaningless.
    pub fn validate(&self) -> Result<()> {
        let lists = [
            ("remap.extensions", &self.remap.extensions),
            ("merge.extensions", &self.merge.extensions),
            ("invert.extensions", &self.invert.extensions),
        ];
        for (name, list) in lists {
            if list.is_empty() {
                return Err(PagetintError::Config(format!("{name} must not be empty")));
            }
        }
        if self.remap.output_dir_name.is_empty() {
            return Err(PagetintError::Config(
                "remap.output_dir_name must not be empty".into(),
            ));
        }
        if !(self.merge.page_dpi.is_finite() && self.merge.page_dpi > 0.0) {
            return Err(PagetintError::Config(format!(
                "merge.page_dpi must be positive, got {}",
                self.merge.page_dpi
            )));
        }
        if self.rasterize.dpi == 0 {
            return Err(PagetintError::Config("rasterize.dpi must be positive".into()));
        }
        Ok(())
    }
}

/// True when `path` has an extension matching one of `extensions`,
/// ignoring ASCII case. Entries may be written with or without a leading dot.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(ext))
}
