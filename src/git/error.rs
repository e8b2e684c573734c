//! Git error interpretation
//!
//! libgit2 messages are long and transport specific; these are reduced to a
//! short reason shown next to the URL that failed.

use git2::{Error, ErrorClass, ErrorCode};

/// Interpret a git2 error and provide a more user-friendly message
pub fn interpret_git_error(err: &Error) -> String {
    let message = err.message().to_lowercase();

    if err.code() == ErrorCode::NotFound
        || message.contains("not found")
        || message.contains("404")
    {
        if message.contains("reference") || message.contains("branch") {
            return format!("Branch not found: {}", err.message());
        }
        return "Repository not found".to_string();
    }
    if err.code() == ErrorCode::Auth
        || message.contains("authentication")
        || message.contains("credentials")
    {
        return "Authentication failed".to_string();
    }
    if err.code() == ErrorCode::Exists || message.contains("exists and is not an empty directory") {
        return "Clone target already exists and is not empty".to_string();
    }
    if message.contains("timed out") || message.contains("connection") || message.contains("resolve")
    {
        return "Network error".to_string();
    }
    if err.code() == ErrorCode::Certificate || message.contains("certificate") {
        return "Certificate error".to_string();
    }

    match err.class() {
        ErrorClass::Http => format!("HTTP error: {}", err.message()),
        ErrorClass::Ssh => format!("SSH error: {}", err.message()),
        _ => err.message().to_string(),
    }
}
