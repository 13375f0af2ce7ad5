// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Flat directory listing shared by the inverter and the aggregator.

use std::fs;
use std::path::{Path, PathBuf};

use pagetint_core::config::has_extension;
use pagetint_core::error::{PagetintError, Result};

/// Files directly inside `dir` whose extension is in `extensions`, sorted by
/// raw file name. Sub-directories are not descended.
pub fn list_images(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(PagetintError::InvalidInput(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_matching_top_level_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.png"), b"").unwrap();
        fs::write(root.join("a.JPG"), b"").unwrap();
        fs::write(root.join("c.txt"), b"").unwrap();
        fs::create_dir(root.join("d.png")).unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub/e.png"), b"").unwrap();

        let exts = vec!["png".to_string(), "jpg".to_string()];
        let names: Vec<_> = list_images(root, &exts)
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["a.JPG", "b.png"]);
    }
}
