//! Settings error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while layering `~/.btcrpc/settings.json` and `BTCRPC_*`
/// overrides into a [`ClientSettings`](crate::ClientSettings), or while
/// resolving node credentials from it.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file (default path or `--settings`) exists but could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    /// The settings file is not JSON, or does not fit the `ClientSettings` shape.
    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A connection value the node cannot be reached with, such as an empty or
    /// non-HTTP `connection.url` or a zero `connection.timeoutMs`.
    #[error("invalid settings value: {0}")]
    InvalidValue(String),
    /// The node's `.cookie` file is unreadable or not `user:password`.
    #[error("unusable cookie file {path}: {reason}")]
    Cookie {
        /// `connection.cookieFile` as configured.
        path: PathBuf,
        /// Read error or format problem.
        reason: String,
    },
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
