//! Shared primitives used across the portfolio crates.

/// Result alias used across the workspace.
pub type SiteResult<T> = Result<T, SiteError>;

/// Workspace error: a stable dotted code plus a human readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct SiteError {
    pub code: &'static str,
    pub message: String,
}

impl SiteError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// True for errors raised while validating configuration, which are fatal
    /// to whatever was being constructed.
    pub fn is_configuration(&self) -> bool {
        self.code.split('.').nth(1) == Some("config") || self.code.starts_with("config.")
    }
}
