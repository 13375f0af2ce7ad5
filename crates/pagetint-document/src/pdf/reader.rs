// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — open and inspect existing PDF documents using the `lopdf`
// crate. Used to report on merged output.

use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};
use pagetint_core::error::PagetintError;
use tracing::{debug, info, instrument};

/// Reads existing PDF files.
pub struct PdfReader {
    /// The underlying lopdf document.
    document: Document,
}

impl PdfReader {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PagetintError> {
        let path_ref = path.as_ref();
        info!("Opening PDF: {}", path_ref.display());

        let document = Document::load(path_ref).map_err(|err| {
            PagetintError::PdfError(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded");

        Ok(Self { document })
    }

    /// Create a reader from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, PagetintError> {
        let document = Document::load_mem(data).map_err(|err| {
            PagetintError::PdfError(format!("failed to load PDF from memory: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");

        Ok(Self { document })
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Width and height of each page in points, in page order.
    ///
    /// Taken from the page's `/MediaBox`, or the nearest ancestor's when the
    /// page inherits it.
    pub fn page_sizes(&self) -> Result<Vec<(f32, f32)>, PagetintError> {
        // get_pages is keyed by 1-indexed page number, already in order.
        self.document
            .get_pages()
            .into_values()
            .map(|page_id| self.media_box_size(page_id))
            .collect()
    }

    fn media_box_size(&self, page_id: ObjectId) -> Result<(f32, f32), PagetintError> {
        let mut node = Some(page_id);
        while let Some(id) = node {
            let dict = self.dictionary(id)?;
            if let Ok(media_box) = dict.get(b"MediaBox") {
                return self.box_size(media_box, page_id);
            }
            node = dict.get(b"Parent").and_then(Object::as_reference).ok();
        }
        Err(PagetintError::PdfError(format!(
            "page {:?} has no MediaBox",
            page_id
        )))
    }

    fn box_size(&self, object: &Object, page_id: ObjectId) -> Result<(f32, f32), PagetintError> {
        let object = match object {
            Object::Reference(id) => self.document.get_object(*id).map_err(|err| {
                PagetintError::PdfError(format!("broken MediaBox reference: {}", err))
            })?,
            other => other,
        };
        let values: Vec<f32> = object
            .as_array()
            .map_err(|err| PagetintError::PdfError(format!("MediaBox is not an array: {}", err)))?
            .iter()
            .filter_map(number)
            .collect();
        match values.as_slice() {
            [x0, y0, x1, y1] => Ok(((x1 - x0).abs(), (y1 - y0).abs())),
            _ => Err(PagetintError::PdfError(format!(
                "page {:?} has a malformed MediaBox",
                page_id
            ))),
        }
    }

    fn dictionary(&self, id: ObjectId) -> Result<&Dictionary, PagetintError> {
        self.document
            .get_dictionary(id)
            .map_err(|err| PagetintError::PdfError(format!("object {:?}: {}", id, err)))
    }
}

fn number(object: &Object) -> Option<f32> {
    match object {
        Object::Integer(value) => Some(*value as f32),
        Object::Real(value) => Some(*value as f32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let result = PdfReader::from_bytes(b"this is not a pdf");
        assert!(matches!(result, Err(PagetintError::PdfError(_))));
    }

    #[test]
    fn missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PdfReader::open(dir.path().join("absent.pdf")).is_err());
    }
}
