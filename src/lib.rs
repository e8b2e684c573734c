//! Adritian tools
//!
//! Command-line helpers for the Adritian Hugo theme:
//! - `download-content`: fetch demo site content from a git repository
//! - `update-font`: merge an icon-font export into the theme layout
//! - `copy-example-content`: copy the theme's example site content
//!
//! The binaries are thin; every operation here returns a [`error::Result`]
//! and only the binaries decide on the process exit status.

pub mod cli;
pub mod commands;
pub mod common;
pub mod error;
pub mod example;
pub mod fetch;
pub mod font;
pub mod git;
pub mod ops;
pub mod prompt;
pub mod ui;
