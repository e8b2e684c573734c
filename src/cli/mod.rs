//! CLI definitions using clap derive API
//!
//! This module is organized into submodules, one per binary:
//! - download: `download-content` arguments
//! - font: `update-font` arguments
//! - example: `copy-example-content` arguments

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use miette::Diagnostic;

use crate::error::AdritianError;
use crate::ui::Reporter;

pub mod download;
pub mod example;
pub mod font;

pub use download::DownloadContentArgs;
pub use example::CopyExampleContentArgs;
pub use font::UpdateFontArgs;

/// Help styling shared by all binaries
pub fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default())
}

/// Parse arguments, exiting with status 1 on usage errors.
///
/// `--help` and `--version` still print to stdout and exit 0.
pub fn parse_or_exit<T: Parser>() -> T {
    T::try_parse().unwrap_or_else(|err| {
        let code = i32::from(err.use_stderr());
        let _ = err.print();
        std::process::exit(code);
    })
}

/// Print `err` and its help hint, if any.
pub fn report_error(reporter: &dyn Reporter, err: &AdritianError) {
    reporter.error(&err.to_string());
    if let Some(help) = err.help() {
        eprintln!("{help}");
    }
}
