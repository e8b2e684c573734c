//! URL normalization for git operations

use std::borrow::Cow;
use std::path::Path;

/// Rewrite SCP-style SSH URLs (`git@host:owner/repo`) into `ssh://` form,
/// which libgit2 parses reliably.
pub fn normalize_ssh_url(url: &str) -> Cow<'_, str> {
    let Some(rest) = url.strip_prefix("git@") else {
        return Cow::Borrowed(url);
    };
    match rest.split_once(':') {
        Some((host, path)) => {
            let path = path.trim_start_matches('/');
            Cow::Owned(format!("ssh://git@{host}/{path}"))
        }
        None => Cow::Borrowed(url),
    }
}

/// Whether `url` points at a repository on the local filesystem.
///
/// Absolute paths and relative paths that exist count as local. libgit2
/// cannot shallow-fetch over the local transport, so depth is only applied
/// to remote URLs.
pub fn is_local(url: &str) -> bool {
    let path = Path::new(url);
    url.starts_with("file://") || path.is_absolute() || path.exists()
}
