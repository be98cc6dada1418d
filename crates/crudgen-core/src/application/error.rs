//! Application layer errors.
//!
//! These errors represent failures in orchestration, not naming or planning.
//! Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Scaffold root already exists and the policy is `abort`.
    #[error("Scaffold root already exists at {path}")]
    RootExists { path: PathBuf },

    /// A folder or file inside the root already exists and the policy is `abort`.
    #[error("Entry already exists at {path}")]
    EntryExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared state behind an adapter was poisoned.
    #[error("Adapter lock poisoned")]
    LockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RootExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --on-existing skip to fill in only the missing files".into(),
                "Use --on-existing overwrite to regenerate every file (destructive)".into(),
                "Choose a different resource name or output directory".into(),
            ],
            Self::EntryExists { path } => vec![
                format!("Already exists: {}", path.display()),
                "Use --on-existing skip to keep existing entries".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
                "Entries created before the failure were left in place".into(),
            ],
            Self::LockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RootExists { .. } | Self::EntryExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::LockError => ErrorCategory::Internal,
        }
    }
}
