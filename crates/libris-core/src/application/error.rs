//! Application layer errors.
//!
//! These errors represent failures in orchestration and persistence, not in
//! the catalog types themselves. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading or persisting the catalog.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Reading, writing, or creating a persistence file failed.
    #[error("Storage error at {path}: {reason}")]
    Storage { path: PathBuf, reason: String },

    /// A persistence file exists but does not hold a valid collection.
    #[error("Corrupt data file {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Serialising a collection failed.
    #[error("Failed to encode {path}: {reason}")]
    Encoding { path: PathBuf, reason: String },

    /// Shared in-memory state could not be locked (poisoned lock).
    #[error("Storage lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Storage { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::Corrupt { path, .. } => vec![
                format!("'{}' is not a valid JSON array of records", path.display()),
                "Fix the file by hand, or move it aside to start with an empty collection"
                    .into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Corrupt { .. } => ErrorCategory::CorruptData,
            Self::Storage { .. } | Self::Encoding { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
