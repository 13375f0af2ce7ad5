// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — RGB normalisation, exact-match recoloring, and inversion.

pub mod invert;
pub mod processor;
pub mod remap;

pub use invert::ColorInverter;
pub use processor::ImageProcessor;
pub use remap::ColorRemapper;
