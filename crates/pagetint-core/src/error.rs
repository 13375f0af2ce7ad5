// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for pagetint.

use thiserror::Error;

/// Top-level error type for all pagetint operations.
#[derive(Debug, Error)]
pub enum PagetintError {
    // -- Input errors --
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no qualifying image files found in {0}")]
    EmptyInput(String),

    // -- Image errors --
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("failed to write output: {0}")]
    Write(String),

    // -- PDF errors --
    #[error("PDF operation failed: {0}")]
    PdfError(String),

    #[error("PDF rasterizer failed: {0}")]
    Rasterizer(String),

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PagetintError>;
