//! Example site content copy
//!
//! Copies the theme repository's `exampleSite/content` into the project's
//! `content/` directory. Existing content is left alone unless forced.

use std::path::PathBuf;

use crate::error::Result;
use crate::ops::RepoOps;
use crate::ui::Reporter;

pub const THEME_REPO_URL: &str = "https://github.com/zetxek/adritian-free-hugo-theme";

#[derive(Debug, Clone)]
pub struct ExampleConfig {
    pub repo_url: String,
    pub temp_dir_name: String,
    /// Path of the example content inside the cloned repository
    pub content_path: PathBuf,
    /// Target directory, relative to `project_root`
    pub destination: PathBuf,
    pub project_root: PathBuf,
}

impl Default for ExampleConfig {
    fn default() -> Self {
        Self {
            repo_url: THEME_REPO_URL.to_string(),
            temp_dir_name: "tmp".to_string(),
            content_path: PathBuf::from("exampleSite").join("content"),
            destination: PathBuf::from("content"),
            project_root: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExampleRequest {
    /// Replace a non-empty destination
    pub force: bool,
    pub branch: String,
}

impl Default for ExampleRequest {
    fn default() -> Self {
        Self {
            force: false,
            branch: "main".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleOutcome {
    Copied,
    /// Destination already had content and `force` was not set
    Skipped,
}

pub fn copy_example_content(
    request: &ExampleRequest,
    config: &ExampleConfig,
    ops: &mut dyn RepoOps,
    reporter: &dyn Reporter,
) -> Result<ExampleOutcome> {
    let temp_dir = config.project_root.join(&config.temp_dir_name);

    let result = copy_from_clone(request, config, ops, reporter);
    if result.is_err() && ops.exists(&temp_dir) {
        if let Err(cleanup) = ops.remove_dir(&temp_dir) {
            reporter.warn(&format!("Failed to clean up: {cleanup}"));
        }
    }
    result
}

fn copy_from_clone(
    request: &ExampleRequest,
    config: &ExampleConfig,
    ops: &mut dyn RepoOps,
    reporter: &dyn Reporter,
) -> Result<ExampleOutcome> {
    let temp_dir = config.project_root.join(&config.temp_dir_name);
    let destination = config.project_root.join(&config.destination);

    ops.create_dir(&temp_dir)?;
    reporter.step(&format!(
        "Downloading repository from branch: {}...",
        request.branch
    ));
    ops.clone_shallow(&config.repo_url, Some(&request.branch), &temp_dir)?;

    let exists = ops.exists(&destination);
    if ops.has_entries(&destination) && !request.force {
        reporter.info(
            "Content directory already exists and contains files. Use --force to override.",
        );
        ops.remove_dir(&temp_dir)?;
        return Ok(ExampleOutcome::Skipped);
    }

    if request.force && exists {
        reporter.info("Removing existing content...");
        ops.remove_dir(&destination)?;
    }
    ops.create_dir(&destination)?;

    reporter.step("Copying example site content...");
    ops.copy_dir(&temp_dir.join(&config.content_path), &destination)?;

    reporter.step("Cleaning up...");
    ops.remove_dir(&temp_dir)?;

    reporter.success("Example site content copied successfully!");
    Ok(ExampleOutcome::Copied)
}
