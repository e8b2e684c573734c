//! Console presentation layer
//!
//! This module handles:
//! - Step, info, warning and error messages for the tools
//! - A spinner while a repository is being cloned
//!
//! All output goes through the [`Reporter`] trait so library code never
//! writes to the terminal directly and `--quiet` can silence progress chatter.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Sink for user-facing progress messages
pub trait Reporter {
    /// Section heading, e.g. "Copying CSS files..."
    fn step(&self, message: &str);

    /// Per-item detail, e.g. a copied path
    fn info(&self, message: &str);

    /// Non-fatal problem; processing continues
    fn warn(&self, message: &str);

    /// Fatal problem, reported once before the tool exits
    fn error(&self, message: &str);

    /// Final line of a successful run
    fn success(&self, message: &str);

    /// Start a spinner for a long-running step. Returns `None` when progress is
    /// not displayed.
    fn spinner(&self, _message: &str) -> Option<ProgressBar> {
        None
    }
}

/// Reporter writing styled output to stdout/stderr
pub struct ConsoleReporter {
    quiet: bool,
    step_style: Style,
    warn_style: Style,
    error_style: Style,
    success_style: Style,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            step_style: Style::new().cyan().bold(),
            warn_style: Style::new().yellow().bold(),
            error_style: Style::new().red().bold(),
            success_style: Style::new().green().bold(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn step(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.step_style.apply_to(message));
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", self.warn_style.apply_to("Warning:"), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", self.error_style.apply_to("Error:"), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.success_style.apply_to(message));
        }
    }

    fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.quiet {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .ok()?
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    }
}
