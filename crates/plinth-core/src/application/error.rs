//! Application layer errors.
//!
//! One variant per failure class of the init pipeline and its collaborators.
//! Every stage-level error is caught at the orchestrator boundary, turned
//! into a single result-log entry via [`ApplicationError::status_code`], and
//! short-circuits the remaining stages.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::status::code;

/// Errors that occur while driving the workflows.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A remote call (catalog fetch, notification) was rejected.
    #[error("Network error: {reason}")]
    Network { reason: String },

    /// The archive backend rejected our credentials.
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    /// Clone or download/extract failure.
    #[error("Acquisition failed for '{slug}': {reason}")]
    Acquisition { slug: String, reason: String },

    /// Directory create/erase or file read/write failure.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The package-manager process could not be started.
    #[error("Could not spawn '{manager}': {reason}")]
    ProcessSpawn { manager: String, reason: String },

    /// Manifest parse failure.
    #[error("Problem with reading {file}")]
    Deserialization { file: String, reason: String },

    /// Manifest write failure.
    #[error("Problem with saving {file}")]
    Serialization { file: String, reason: String },

    /// The interactive prompt could not be rendered or read.
    #[error("Prompt failed: {reason}")]
    Prompt { reason: String },

    /// `--package-manager` named a manager we do not know.
    #[error("Unknown package manager '{name}'")]
    UnknownPackageManager { name: String },
}

impl ApplicationError {
    /// The status code this error contributes to the result log.
    pub fn status_code(&self) -> i32 {
        match self {
            Self::Network { .. } => code::INTERNAL_SERVER_ERROR,
            Self::Unauthorized { .. } => code::UNAUTHORIZED,
            Self::Acquisition { .. } => code::INTERNAL_SERVER_ERROR,
            Self::Filesystem { .. } => code::ERROR,
            Self::ProcessSpawn { .. } => code::ERROR,
            Self::Deserialization { .. } => code::INTERNAL_SERVER_ERROR,
            Self::Serialization { .. } => code::INTERNAL_SERVER_ERROR,
            Self::Prompt { .. } => code::ERROR,
            Self::UnknownPackageManager { .. } => code::ERROR,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Network { reason } => vec![
                format!("The remote service rejected the call: {reason}"),
                "Check your network connection and try again".into(),
            ],
            Self::Unauthorized { .. } => vec![
                "Your credentials were rejected by the download service".into(),
                "Log in again or set PLINTH_TOKEN to a valid token".into(),
            ],
            Self::Acquisition { slug, .. } => vec![
                format!("Could not fetch the starter for '{slug}'"),
                "The partially created directory is left as-is; remove it before retrying".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ProcessSpawn { manager, .. } => vec![
                format!("Ensure '{manager}' is installed and in your PATH"),
            ],
            Self::Deserialization { file, .. } | Self::Serialization { file, .. } => vec![
                format!("Check that {file} exists and is valid JSON"),
            ],
            Self::Prompt { .. } => vec![
                "Interactive prompts need a terminal; pass the value as an argument instead"
                    .into(),
            ],
            Self::UnknownPackageManager { name } => vec![
                format!("'{name}' is not a supported package manager"),
                "Supported managers: npm, yarn".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network { .. } | Self::Acquisition { .. } => ErrorCategory::Remote,
            Self::Unauthorized { .. } => ErrorCategory::Auth,
            Self::Filesystem { .. }
            | Self::ProcessSpawn { .. }
            | Self::Deserialization { .. }
            | Self::Serialization { .. } => ErrorCategory::Internal,
            Self::Prompt { .. } | Self::UnknownPackageManager { .. } => ErrorCategory::UserError,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    Auth,
    Remote,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, ApplicationError>;

// ── tests ─────────────────────────────────────────────────────────────────────
