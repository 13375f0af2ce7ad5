// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — writing image PDFs, inspecting PDFs, and rasterizing pages
// through an external tool.

pub mod rasterize;
pub mod reader;
pub mod writer;

pub use rasterize::PdfRasterizer;
pub use reader::PdfReader;
pub use writer::PdfWriter;
