// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pagetint — batch image/PDF conversion from the command line.
//
// Entry point. Initialises logging, loads configuration, and dispatches to
// the document operations.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagetint_core::human_errors::{HumanError, Severity, humanize_error};
use pagetint_core::{AppConfig, BatchReport, PagetintError};
use pagetint_document::{
    ColorInverter, ColorRemapper, NaturalOrderAggregator, PdfRasterizer, PdfReader,
};

#[derive(Parser)]
#[command(name = "pagetint")]
#[command(version, about = "Batch color remapping, inversion, and image/PDF conversion", long_about = None)]
struct Cli {
    /// JSON configuration file (missing fields use defaults)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace exact colors in one image or a whole directory tree
    Remap {
        /// Image file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (single image) or directory (tree).
        /// Defaults to overwriting the image, or INPUT/color_converted
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Merge the images in a directory into one PDF, in natural name order
    Merge {
        /// Directory holding the images
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output PDF (default: DIR/merged.pdf)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Invert the colors of every image in a directory
    Invert {
        /// Directory holding the images
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory (default: DIR/inverted)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Render each page of a PDF to PNG with an external rasterizer
    Rasterize {
        /// PDF file
        #[arg(value_name = "PDF")]
        input: PathBuf,

        /// Base directory; pages go to BASE/<pdf name>/ (default: next to the PDF)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Render resolution
        #[arg(long, value_name = "DPI")]
        dpi: Option<u32>,

        /// Rasterizer executable (default: pdftoppm)
        #[arg(long, value_name = "PATH")]
        program: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON
    Config {
        /// Write it to this file instead of stdout
        #[arg(long, value_name = "FILE")]
        write: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Operation failed");
            if let Some(err) = err.downcast_ref::<PagetintError>() {
                eprintln!("{}", render_human_error(&humanize_error(err)));
            } else {
                eprintln!("{err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Remap { input, out } => {
            let remapper = ColorRemapper::new(config.remap);
            if input.is_file() {
                remapper.remap_file(&input, out.as_deref())?;
                println!("Converted {}", out.as_deref().unwrap_or(input.as_path()).display());
            } else {
                let report = remapper.remap_tree(&input, out.as_deref())?;
                print_report("Converted", &report);
            }
        }

        Commands::Merge { input, out } => {
            let output = out.unwrap_or_else(|| config.merge.default_output_path(&input));
            let pages = NaturalOrderAggregator::new(config.merge).merge(&input, &output)?;
            let written = PdfReader::open(&output)?.page_count();
            tracing::debug!(pages, written, "Merged PDF verified");
            println!("Merged {} image(s) into {}", pages, output.display());
        }

        Commands::Invert { input, out } => {
            let report = ColorInverter::new(config.invert).invert_dir(&input, out.as_deref())?;
            print_report("Inverted", &report);
        }

        Commands::Rasterize {
            input,
            out,
            dpi,
            program,
        } => {
            if let Some(dpi) = dpi {
                config.rasterize.dpi = dpi;
            }
            if let Some(program) = program {
                config.rasterize.program = program;
            }
            config.validate()?;
            let output_dir = PdfRasterizer::output_dir_for(&input, out.as_deref())?;
            let pages = PdfRasterizer::new(config.rasterize).rasterize(&input, out.as_deref())?;
            println!("Rendered {} page(s) into {}", pages, output_dir.display());
        }

        Commands::Config { write } => match write {
            Some(path) => {
                config
                    .save(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
            None => println!("{}", serde_json::to_string_pretty(&config)?),
        },
    }

    Ok(())
}

/// Settings from `path`, or the defaults when no file is given.
fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            AppConfig::load(path).with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(AppConfig::default()),
    }
}

/// Terminal rendering of a humanized error: severity, message, suggestion,
/// and a retry hint when running again could help.
fn render_human_error(human: &HumanError) -> String {
    let label = match human.severity {
        Severity::Transient => "Temporary problem",
        Severity::ActionRequired => "Action needed",
        Severity::Permanent => "Cannot continue",
    };
    let mut text = format!("{label}: {}\n{}", human.message, human.suggestion);
    if human.retriable {
        text.push_str("\nRunning the same command again may succeed.");
    }
    text
}

fn print_report(verb: &str, report: &BatchReport) {
    for (path, reason) in &report.failed {
        println!("  skipped {}: {}", path.display(), reason);
    }
    println!("{} {} file(s)", verb, report.processed);
    if !report.is_clean() {
        println!("{} file(s) could not be processed", report.failed.len());
    }
}
