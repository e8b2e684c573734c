//! Common test utilities for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use git2::{IndexAddOption, Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

/// A project directory the binaries run in
pub struct TestWorkspace {
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        write_file(&self.path.join(path), content);
    }

    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// A local git repository standing in for the remote content repository
pub struct OriginRepo {
    pub temp: TempDir,
    repo: Repository,
}

impl OriginRepo {
    /// Create a repository on `main` with one commit holding `files`
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(temp.path(), &opts).expect("Failed to init repository");

        let origin = Self { temp, repo };
        origin.commit(files, "refs/heads/main", "Initial content");
        origin
    }

    /// Add a branch on top of `main` with extra `files`
    pub fn add_branch(&self, name: &str, files: &[(&str, &str)]) {
        self.commit(files, &format!("refs/heads/{name}"), "Branch content");
    }

    pub fn url(&self) -> String {
        self.temp.path().display().to_string()
    }

    /// Path of this repository relative to a sibling temp directory
    pub fn relative_url(&self, from: &Path) -> String {
        assert_eq!(
            from.parent(),
            self.temp.path().parent(),
            "origin and workspace should share a temp parent"
        );
        let name = self
            .temp
            .path()
            .file_name()
            .expect("temp dir has a name")
            .to_string_lossy();
        format!("../{name}")
    }

    fn commit(&self, files: &[(&str, &str)], update_ref: &str, message: &str) {
        for (path, content) in files {
            write_file(&self.temp.path().join(path), content);
        }

        let mut index = self.repo.index().expect("Failed to open index");
        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .expect("Failed to stage files");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");
        let sig = Signature::now("Test", "test@example.com").expect("Failed to create signature");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();

        self.repo
            .commit(Some(update_ref), &sig, &sig, message, &tree, &parents)
            .expect("Failed to commit");
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn bin_cmd(name: &str, workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(name).expect("binary should be built");
    cmd.current_dir(workdir)
        .env_remove("ADRITIAN_CONTENT_REPO")
        .env_remove("ADRITIAN_THEME_REPO")
        .env("NO_COLOR", "1");
    cmd
}
