//! Error types and handling for the Adritian tools
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`git`]: Git operation errors

pub mod fs;
pub mod git;

pub use fs::{copy_failed, read_failed, remove_failed, write_failed};
pub use git::clone_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the Adritian tools
#[derive(Error, Diagnostic, Debug)]
pub enum AdritianError {
    // Usage errors
    #[error("Invalid directories specified: {invalid}")]
    #[diagnostic(
        code(adritian::fetch::invalid_directories),
        help("Available options: {allowed}")
    )]
    InvalidDirectories { invalid: String, allowed: String },

    #[error("{what} directory is required")]
    #[diagnostic(code(adritian::usage::missing_argument))]
    MissingArgument { what: &'static str },

    // Git errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(adritian::git::clone_failed),
        help("Check that the URL and branch are correct and that the repository is reachable")
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(adritian::git::operation_failed))]
    GitOperationFailed { message: String },

    // Font updater errors
    #[error("Source directory '{path}' does not exist")]
    #[diagnostic(
        code(adritian::font::source_not_found),
        help("Pass the unpacked icon-font export with --source")
    )]
    SourceNotFound { path: String },

    #[error("Invalid substitution pattern: {message}")]
    #[diagnostic(code(adritian::font::invalid_pattern))]
    InvalidPattern { message: String },

    #[error("Failed to read confirmation: {message}")]
    #[diagnostic(code(adritian::prompt::failed))]
    PromptFailed { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(adritian::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(adritian::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(adritian::fs::copy_failed))]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(code(adritian::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(adritian::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AdritianError {
    fn from(err: std::io::Error) -> Self {
        AdritianError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<git2::Error> for AdritianError {
    fn from(err: git2::Error) -> Self {
        AdritianError::GitOperationFailed {
            message: err.to_string(),
        }
    }
}

impl From<regex::Error> for AdritianError {
    fn from(err: regex::Error) -> Self {
        AdritianError::InvalidPattern {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for AdritianError {
    fn from(err: inquire::InquireError) -> Self {
        AdritianError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AdritianError>;
