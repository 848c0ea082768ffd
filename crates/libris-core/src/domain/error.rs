// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("'{input}' is not a valid identifier")]
    InvalidId { input: String },

    #[error("'{input}' is not a valid publication year")]
    InvalidYear { input: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("No identifiers left after {last}")]
    IdSpaceExhausted { last: i32 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidId { input } => vec![
                format!("'{}' is not a whole number", input),
                "Identifiers are shown at the start of each listed line".into(),
            ],
            Self::InvalidYear { input } => vec![
                format!("'{}' is not a whole number", input),
                "Enter the year as digits, for example: 1965".into(),
            ],
            Self::IdSpaceExhausted { .. } => vec![
                "The collection already uses the largest possible identifier".into(),
                "Edit the data file to renumber entries".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidId { .. } | Self::InvalidYear { .. } => ErrorCategory::Validation,
            Self::IdSpaceExhausted { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
