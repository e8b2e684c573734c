//! Repository cloning

use std::path::Path;

use git2::{FetchOptions, RemoteCallbacks, Repository, build::RepoBuilder};

use super::auth::setup_auth_callbacks;
use super::error::interpret_git_error;
use super::url::{is_local, normalize_ssh_url};
use crate::error::{Result, clone_failed};

/// Clone `url` into `target` with a depth of one commit.
///
/// When `branch` is given it is handed to libgit2 as a single ref name, so
/// names such as `feature/new-design` are never split. `target` must be
/// missing or empty.
pub fn clone_shallow(url: &str, branch: Option<&str>, target: &Path) -> Result<Repository> {
    let mut callbacks = RemoteCallbacks::new();
    setup_auth_callbacks(&mut callbacks);

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);
    if !is_local(url) {
        fetch_options.depth(1);
    }

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);
    if let Some(branch) = branch {
        builder.branch(branch);
    }

    let url_to_clone = normalize_ssh_url(url);
    builder
        .clone(url_to_clone.as_ref(), target)
        .map_err(|e| clone_failed(url, interpret_git_error(&e)))
}
