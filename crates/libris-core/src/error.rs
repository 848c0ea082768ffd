//! Unified error handling for Libris Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Libris Core operations.
#[derive(Debug, Error, Clone)]
pub enum LibrisError {
    /// Errors from the domain layer (invalid identifiers, exhausted id space).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (persistence failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl LibrisError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input from the user.
    Validation,
    /// A persistence file exists but could not be understood.
    CorruptData,
    /// Storage or internal failure.
    Internal,
}

/// Convenient result type alias.
pub type LibrisResult<T> = Result<T, LibrisError>;
