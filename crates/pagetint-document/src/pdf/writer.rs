// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — build a multi-page PDF from raster images using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use image::RgbImage;
use pagetint_core::error::PagetintError;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info, instrument, warn};

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Creates PDF documents whose pages are raster images.
///
/// Each page is sized to its image at `page_dpi` and the image fills the page
/// edge to edge, so at 72 DPI one pixel maps to one point.
pub struct PdfWriter {
    page_dpi: f32,
    /// Title metadata embedded in the PDF /Info dictionary.
    title: Option<String>,
}

impl PdfWriter {
    pub fn new(page_dpi: f32) -> Self {
        Self {
            page_dpi,
            title: None,
        }
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Page size in points for an image of `width` x `height` pixels.
    pub fn page_size_pt(&self, width: u32, height: u32) -> (f32, f32) {
        let scale = 72.0 / self.page_dpi;
        (width as f32 * scale, height as f32 * scale)
    }

    /// Create a PDF with one page per image, in slice order.
    #[instrument(skip_all, fields(pages = images.len()))]
    pub fn create_from_images(&self, images: &[RgbImage]) -> Result<Vec<u8>, PagetintError> {
        if images.is_empty() {
            return Err(PagetintError::PdfError("no images to place on pages".into()));
        }
        let title = self.title.as_deref().unwrap_or("Merged images");
        info!(title, dpi = self.page_dpi, "Creating image PDF");

        let mut doc = PdfDocument::new(title);
        let mut pages = Vec::with_capacity(images.len());

        for image in images {
            let (width, height) = image.dimensions();
            let raw = RawImage {
                pixels: RawImageData::U8(image.as_raw().clone()),
                width: width as usize,
                height: height as usize,
                data_format: RawImageFormat::RGB8,
                tag: Vec::new(),
            };
            let xobject_id = doc.add_image(&raw);

            let (page_w_pt, page_h_pt) = self.page_size_pt(width, height);
            let ops = vec![Op::UseXobject {
                id: xobject_id,
                transform: XObjectTransform {
                    translate_x: Some(Pt(0.0)),
                    translate_y: Some(Pt(0.0)),
                    scale_x: None,
                    scale_y: None,
                    dpi: Some(self.page_dpi),
                    rotate: None,
                },
            }];

            pages.push(PdfPage::new(
                Mm(page_w_pt * MM_PER_PT),
                Mm(page_h_pt * MM_PER_PT),
                ops,
            ));
            debug!(width, height, page_w_pt, page_h_pt, "Image placed on page");
        }

        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "printpdf reported warnings while saving");
        }

        Ok(output)
    }
}
