//! Demo content download
//!
//! Shallow-clones the demo site repository into a temporary directory next to
//! the project, copies the requested top-level directories (and the Hugo
//! configuration files when `config` is requested) into the project, then
//! removes the clone again.

use std::path::PathBuf;

use crate::error::{AdritianError, Result};
use crate::ops::RepoOps;
use crate::ui::Reporter;

pub const DEFAULT_REPO_URL: &str = "https://github.com/zetxek/adritian-demo";

/// Where content comes from and where it lands
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub repo_url: String,
    /// Allow-list of names accepted on the command line, in copy order
    pub directories: Vec<String>,
    /// Allow-list entry that selects `config_files` instead of a directory
    pub config_marker: String,
    pub config_files: Vec<String>,
    pub temp_dir_name: String,
    pub project_root: PathBuf,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            directories: ["i18n", "data", "content", "assets", "static", "config"]
                .map(String::from)
                .to_vec(),
            config_marker: "config".to_string(),
            config_files: ["hugo.toml", "hugo.disablemenu.toml"]
                .map(String::from)
                .to_vec(),
            temp_dir_name: "temp-clone".to_string(),
            project_root: PathBuf::from("."),
        }
    }
}

impl FetchConfig {
    pub fn temp_dir(&self) -> PathBuf {
        self.project_root.join(&self.temp_dir_name)
    }
}

/// One invocation of the content fetcher
#[derive(Debug, Clone, Default)]
pub struct FetchRequest {
    /// Requested names; empty means the whole allow-list
    pub directories: Vec<String>,
    pub branch: Option<String>,
    pub repo: Option<String>,
}

impl FetchRequest {
    /// Resolve the requested names against the allow-list.
    ///
    /// Duplicates are dropped. Every unknown name is reported in one error.
    pub fn resolve_directories(&self, config: &FetchConfig) -> Result<Vec<String>> {
        if self.directories.is_empty() {
            return Ok(config.directories.clone());
        }

        let invalid: Vec<&str> = self
            .directories
            .iter()
            .filter(|dir| !config.directories.contains(dir))
            .map(String::as_str)
            .collect();
        if !invalid.is_empty() {
            return Err(AdritianError::InvalidDirectories {
                invalid: invalid.join(", "),
                allowed: config.directories.join(", "),
            });
        }

        let mut resolved: Vec<String> = Vec::with_capacity(self.directories.len());
        for dir in &self.directories {
            if !resolved.contains(dir) {
                resolved.push(dir.clone());
            }
        }
        Ok(resolved)
    }

    fn repo_url<'a>(&'a self, config: &'a FetchConfig) -> &'a str {
        self.repo.as_deref().unwrap_or(&config.repo_url)
    }
}

/// What a successful fetch did
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub directories: Vec<String>,
    pub files: Vec<String>,
    /// Requested directories or config files absent from the repository
    pub missing: Vec<String>,
}

/// Download the requested content into `config.project_root`.
///
/// Invalid names fail before anything touches the filesystem. Once the
/// temporary clone directory exists it is removed on every exit path.
pub fn download_content(
    request: &FetchRequest,
    config: &FetchConfig,
    ops: &mut dyn RepoOps,
    reporter: &dyn Reporter,
) -> Result<FetchSummary> {
    let directories = request.resolve_directories(config)?;
    let temp_dir = config.temp_dir();

    let outcome = fetch_into_project(&directories, request, config, ops, reporter).and_then(
        |summary| {
            reporter.step("Cleaning up...");
            ops.remove_dir(&temp_dir)?;
            Ok(summary)
        },
    );

    match outcome {
        Ok(summary) => {
            reporter.success("Content downloaded successfully!");
            Ok(summary)
        }
        Err(err) => {
            if ops.exists(&temp_dir) {
                if let Err(cleanup) = ops.remove_dir(&temp_dir) {
                    reporter.warn(&format!("Failed to clean up: {cleanup}"));
                }
            }
            Err(err)
        }
    }
}

fn fetch_into_project(
    directories: &[String],
    request: &FetchRequest,
    config: &FetchConfig,
    ops: &mut dyn RepoOps,
    reporter: &dyn Reporter,
) -> Result<FetchSummary> {
    let temp_dir = config.temp_dir();
    if !ops.exists(&temp_dir) {
        ops.create_dir(&temp_dir)?;
    }

    reporter.step("Cloning repository...");
    ops.clone_shallow(request.repo_url(config), request.branch.as_deref(), &temp_dir)?;

    let mut summary = FetchSummary::default();

    for dir in directories.iter().filter(|d| **d != config.config_marker) {
        let source = temp_dir.join(dir);
        let target = config.project_root.join(dir);

        if !ops.exists(&source) {
            reporter.warn(&format!("Directory {dir} not found in repository"));
            summary.missing.push(dir.clone());
            continue;
        }

        if ops.exists(&target) {
            ops.remove_dir(&target)?;
        }
        reporter.info(&format!("Copying {dir}..."));
        ops.copy_dir(&source, &target)?;
        summary.directories.push(dir.clone());
    }

    if directories.contains(&config.config_marker) {
        for file in &config.config_files {
            let source = temp_dir.join(file);
            if !ops.exists(&source) {
                reporter.warn(&format!("File {file} not found in repository"));
                summary.missing.push(file.clone());
                continue;
            }
            reporter.info(&format!("Copying {file}..."));
            ops.copy_file(&source, &config.project_root.join(file))?;
            summary.files.push(file.clone());
        }
    }

    Ok(summary)
}
