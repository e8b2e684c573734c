//! Git operations for fetching theme content
//!
//! This module handles:
//! - Shallow cloning of repositories, optionally pinned to a branch
//! - Authentication via git's native credential system
//! - Translating libgit2 failures into short, user-facing reasons

mod auth;
mod clone;
mod error;
mod url;

pub use clone::clone_shallow;
pub use error::interpret_git_error;
