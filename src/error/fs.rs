//! File system errors

use std::path::Path;

use super::AdritianError;

pub fn read_failed(path: &Path, err: &std::io::Error) -> AdritianError {
    AdritianError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn write_failed(path: &Path, err: &std::io::Error) -> AdritianError {
    AdritianError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn copy_failed(from: &Path, to: &Path, err: &std::io::Error) -> AdritianError {
    AdritianError::CopyFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn remove_failed(path: &Path, err: &std::io::Error) -> AdritianError {
    AdritianError::RemoveFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
