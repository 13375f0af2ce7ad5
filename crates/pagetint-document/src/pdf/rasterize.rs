// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF → PNG pages through an external rasterizer (poppler's `pdftoppm` by
// default). Rendering itself is entirely the tool's job; this module only
// builds the command line and names the resulting files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use pagetint_core::config::RasterizeConfig;
use pagetint_core::error::{PagetintError, Result};
use tracing::{debug, info, instrument};

/// File prefix handed to the tool; it appends `-<page>.png`.
const RENDER_PREFIX: &str = "pagetint-render";

/// Runs the configured rasterizer over a PDF.
#[derive(Debug, Clone, Default)]
pub struct PdfRasterizer {
    config: RasterizeConfig,
}

impl PdfRasterizer {
    pub fn new(config: RasterizeConfig) -> Self {
        Self { config }
    }

    /// Directory the pages of `pdf_path` are written to:
    /// `<output_base>/<pdf stem>`, with `output_base` defaulting to the
    /// directory holding the PDF.
    pub fn output_dir_for(pdf_path: &Path, output_base: Option<&Path>) -> Result<PathBuf> {
        let stem = pdf_path.file_stem().ok_or_else(|| {
            PagetintError::InvalidInput(format!("{} has no file name", pdf_path.display()))
        })?;
        let base = match output_base {
            Some(base) => base.to_path_buf(),
            None => pdf_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        Ok(base.join(stem))
    }

    /// Render every page of `pdf_path` to `page_<n>.png` and return the page
    /// count.
    #[instrument(skip_all, fields(pdf = %pdf_path.display(), dpi = self.config.dpi))]
    pub fn rasterize(&self, pdf_path: &Path, output_base: Option<&Path>) -> Result<usize> {
        if !pdf_path.is_file() {
            return Err(PagetintError::InvalidInput(format!(
                "{} is not a file",
                pdf_path.display()
            )));
        }

        let output_dir = Self::output_dir_for(pdf_path, output_base)?;
        fs::create_dir_all(&output_dir).map_err(|err| {
            PagetintError::Write(format!("failed to create {}: {}", output_dir.display(), err))
        })?;
        let stale = clear_previous_pages(&output_dir)?;
        info!(output = %output_dir.display(), stale, "Rasterizing PDF");

        let program = &self.config.program;
        let output = Command::new(program)
            .arg("-r")
            .arg(self.config.dpi.to_string())
            .arg("-png")
            .arg(pdf_path)
            .arg(output_dir.join(RENDER_PREFIX))
            .output()
            .map_err(|err| {
                PagetintError::Rasterizer(format!("failed to start {}: {}", program.display(), err))
            })?;

        if !output.status.success() {
            return Err(PagetintError::Rasterizer(format!(
                "{} exited with {}: {}",
                program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let pages = rename_rendered_pages(&output_dir)?;
        info!(pages, "Rasterization complete");
        Ok(pages)
    }
}

/// Page number of a file the tool wrote, e.g. `pagetint-render-07.png` → 7.
fn rendered_page_number(file_name: &str) -> Option<u32> {
    file_name
        .strip_prefix(RENDER_PREFIX)?
        .strip_prefix('-')?
        .strip_suffix(".png")?
        .parse()
        .ok()
}

/// True for `page_<n>.png`, the names this module gives rendered pages.
fn is_page_file(file_name: &str) -> bool {
    file_name
        .strip_prefix("page_")
        .and_then(|rest| rest.strip_suffix(".png"))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Remove pages left by an earlier render into the same directory, so a
/// shorter PDF does not leave trailing pages behind. Returns how many went.
fn clear_previous_pages(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_page_file) {
            fs::remove_file(entry.path()).map_err(|err| {
                PagetintError::Write(format!("failed to remove {}: {}", entry.path().display(), err))
            })?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Rename the tool's zero-padded output to `page_<n>.png`.
fn rename_rendered_pages(dir: &Path) -> Result<usize> {
    let mut rendered = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if let Some(page) = name.to_str().and_then(rendered_page_number) {
            rendered.push((page, entry.path()));
        }
    }
    rendered.sort_by_key(|(page, _)| *page);

    for (page, path) in &rendered {
        let target = dir.join(format!("page_{page}.png"));
        fs::rename(path, &target).map_err(|err| {
            PagetintError::Write(format!("failed to rename {}: {}", path.display(), err))
        })?;
        debug!(page, output = %target.display(), "Saved page");
    }
    Ok(rendered.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_are_parsed_from_tool_output() {
        assert_eq!(rendered_page_number("pagetint-render-1.png"), Some(1));
        assert_eq!(rendered_page_number("pagetint-render-007.png"), Some(7));
        assert_eq!(rendered_page_number("pagetint-render-x.png"), None);
        assert_eq!(rendered_page_number("page_1.png"), None);
        assert_eq!(rendered_page_number("pagetint-render-1.ppm"), None);
    }

    #[test]
    fn rendered_pages_are_renamed_in_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "pagetint-render-10.png",
            "pagetint-render-02.png",
            "pagetint-render-01.png",
            "cover.png",
        ] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        assert_eq!(rename_rendered_pages(dir.path()).unwrap(), 3);

        assert_eq!(
            fs::read_to_string(dir.path().join("page_1.png")).unwrap(),
            "pagetint-render-01.png"
        );
        assert!(dir.path().join("page_2.png").is_file());
        assert!(dir.path().join("page_10.png").is_file());
        assert!(dir.path().join("cover.png").is_file());
    }

    #[test]
    fn pages_from_an_earlier_render_are_cleared() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["page_1.png", "page_2.png", "page_12.png", "page_x.png", "cover.png"] {
            fs::write(dir.path().join(name), name).unwrap();
        }
        fs::create_dir(dir.path().join("page_3.png")).unwrap();

        assert_eq!(clear_previous_pages(dir.path()).unwrap(), 3);

        assert!(!dir.path().join("page_1.png").exists());
        assert!(!dir.path().join("page_12.png").exists());
        assert!(dir.path().join("page_x.png").is_file());
        assert!(dir.path().join("cover.png").is_file());
        assert!(dir.path().join("page_3.png").is_dir());
    }

    #[test]
    fn output_dir_defaults_next_to_pdf() {
        let dir = PdfRasterizer::output_dir_for(Path::new("/docs/report.pdf"), None).unwrap();
        assert_eq!(dir, PathBuf::from("/docs/report"));

        let dir = PdfRasterizer::output_dir_for(
            Path::new("/docs/report.pdf"),
            Some(Path::new("/renders")),
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/renders/report"));
    }

    #[test]
    fn missing_pdf_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = PdfRasterizer::default().rasterize(&dir.path().join("none.pdf"), None);
        assert!(matches!(result, Err(PagetintError::InvalidInput(_))));
    }

    #[test]
    fn missing_program_is_rasterizer_error() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("doc.pdf");
        fs::write(&pdf, b"%PDF-1.5").unwrap();
        let rasterizer = PdfRasterizer::new(RasterizeConfig {
            program: dir.path().join("no-such-rasterizer"),
            dpi: 150,
        });

        let result = rasterizer.rasterize(&pdf, None);

        assert!(matches!(result, Err(PagetintError::Rasterizer(_))));
    }
}
