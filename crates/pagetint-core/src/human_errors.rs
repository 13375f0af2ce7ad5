// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for front-ends.
//
// Every technical error is mapped to a plain sentence with a concrete
// suggestion. Severity drives how a front-end presents the problem.

use crate::error::PagetintError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Likely to succeed if simply run again.
    Transient,
    /// The user has to change an input, a setting, or install something.
    ActionRequired,
    /// The input itself is unusable.
    Permanent,
}

/// A human-readable error with plain message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// What the user should try next.
    pub suggestion: String,
    /// Whether running the same operation again could succeed.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `PagetintError` into a `HumanError`.
pub fn humanize_error(err: &PagetintError) -> HumanError {
    match err {
        // -- Input errors --
        PagetintError::InvalidInput(detail) => HumanError {
            message: "The input path can't be used.".into(),
            suggestion: format!("Check that the file or folder exists and try again. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PagetintError::EmptyInput(dir) => HumanError {
            message: "No images were found to merge.".into(),
            suggestion: format!(
                "Put PNG, JPEG, or BMP files directly inside {dir} (sub-folders are not searched)."
            ),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        // -- Image errors --
        PagetintError::Decode(_) => HumanError {
            message: "An image couldn't be read.".into(),
            suggestion: "The file may be damaged or only named like an image. Try re-saving it as PNG.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        PagetintError::Encode(_) => HumanError {
            message: "The converted image couldn't be encoded.".into(),
            suggestion: "Try an output file with a .png extension.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PagetintError::Write(_) => HumanError {
            message: "The result couldn't be saved.".into(),
            suggestion: "Check that the output folder is writable and the disk is not full.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        // -- PDF errors --
        PagetintError::PdfError(_) => HumanError {
            message: "There's a problem with this PDF file.".into(),
            suggestion: "The file may be damaged. Try opening it in a PDF viewer first to check it works.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        PagetintError::Rasterizer(detail) => humanize_rasterizer_error(detail),

        // -- Configuration --
        PagetintError::Config(detail) => HumanError {
            message: "The configuration file has an invalid setting.".into(),
            suggestion: format!("Fix the setting and run again. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        PagetintError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "A file couldn't be found.".into(),
                    suggestion: "It may have been moved or deleted. Check the path and try again.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "Permission was denied for a file or folder.".into(),
                    suggestion: "Check the permissions, or choose a different output folder.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, the disk may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        PagetintError::Serialization(_) => HumanError {
            message: "The configuration file couldn't be parsed.".into(),
            suggestion: "Make sure it is valid JSON.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
    }
}

/// Parse rasterizer failure details into a human-readable message.
fn humanize_rasterizer_error(detail: &str) -> HumanError {
    let lower = detail.to_ascii_lowercase();

    if lower.contains("not found") || lower.contains("no such file") {
        HumanError {
            message: "The PDF rendering tool isn't installed.".into(),
            suggestion: "Install poppler (it provides pdftoppm) or set rasterize.program to its full path.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        }
    } else if lower.contains("password") {
        HumanError {
            message: "This PDF is password protected.".into(),
            suggestion: "Remove the password in a PDF viewer, then try again.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        }
    } else if lower.contains("syntax error") || lower.contains("couldn't read xref") {
        HumanError {
            message: "This PDF is damaged.".into(),
            suggestion: "Try re-exporting the PDF from the program that created it.".into(),
            retriable: false,
            severity: Severity::Permanent,
        }
    } else {
        HumanError {
            message: "The PDF couldn't be rendered.".into(),
            suggestion: format!("Try again with a lower DPI. (Detail: {detail})"),
            retriable: true,
            severity: Severity::Transient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_merge_is_action_required() {
        let human = humanize_error(&PagetintError::EmptyInput("/scans".into()));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("/scans"));
    }

    #[test]
    fn corrupt_image_is_permanent() {
        let human = humanize_error(&PagetintError::Decode("page3.png: truncated".into()));
        assert_eq!(human.severity, Severity::Permanent);
        assert!(!human.retriable);
    }

    #[test]
    fn missing_rasterizer_is_action_required() {
        let err = PagetintError::Rasterizer("failed to start pdftoppm: No such file or directory".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("pdftoppm"));
    }

    #[test]
    fn encrypted_pdf_is_action_required() {
        let err = PagetintError::Rasterizer("Command Line Error: Incorrect password".into());
        assert_eq!(humanize_error(&err).severity, Severity::ActionRequired);
    }

    #[test]
    fn missing_file_io_error() {
        let err = PagetintError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }
}
