//! Git operation errors

use super::AdritianError;

/// Creates a clone failure for `url`
pub fn clone_failed(url: impl Into<String>, reason: impl Into<String>) -> AdritianError {
    AdritianError::GitCloneFailed {
        url: url.into(),
        reason: reason.into(),
    }
}
