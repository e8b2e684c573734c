//! Side-effecting primitives used by the content fetchers
//!
//! Clone, copy and delete go through [`RepoOps`] so the fetch sequence can
//! be checked call by call without network access.

use std::path::Path;

use crate::common::fs;
use crate::error::Result;
use crate::git;
use crate::ui::Reporter;

pub trait RepoOps {
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a directory with at least one entry
    fn has_entries(&self, path: &Path) -> bool;

    fn create_dir(&mut self, path: &Path) -> Result<()>;

    /// Depth-1 clone of `url` into `target`, pinned to `branch` when given
    fn clone_shallow(&mut self, url: &str, branch: Option<&str>, target: &Path) -> Result<()>;

    /// Remove a directory tree; removing a missing directory succeeds
    fn remove_dir(&mut self, path: &Path) -> Result<()>;

    fn copy_dir(&mut self, from: &Path, to: &Path) -> Result<()>;

    fn copy_file(&mut self, from: &Path, to: &Path) -> Result<()>;
}

/// Real filesystem and libgit2
pub struct LocalRepoOps<'a> {
    reporter: &'a dyn Reporter,
}

impl<'a> LocalRepoOps<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self { reporter }
    }
}

impl RepoOps for LocalRepoOps<'_> {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn has_entries(&self, path: &Path) -> bool {
        fs::has_entries(path)
    }

    fn create_dir(&mut self, path: &Path) -> Result<()> {
        fs::ensure_dir(path)
    }

    fn clone_shallow(&mut self, url: &str, branch: Option<&str>, target: &Path) -> Result<()> {
        let spinner = self.reporter.spinner(&format!("Cloning {url}"));
        let result = git::clone_shallow(url, branch, target);
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        result.map(|_| ())
    }

    fn remove_dir(&mut self, path: &Path) -> Result<()> {
        fs::remove_dir_if_exists(path)
    }

    fn copy_dir(&mut self, from: &Path, to: &Path) -> Result<()> {
        fs::copy_dir_recursive(from, to)
    }

    fn copy_file(&mut self, from: &Path, to: &Path) -> Result<()> {
        fs::copy_file(from, to)
    }
}
