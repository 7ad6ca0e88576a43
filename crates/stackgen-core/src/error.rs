//! Unified error handling for Stackgen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stackgen Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// stackgen-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum StackgenError {
    /// Errors from the domain layer (request validation failures).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StackgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in stackgen".into(),
                "Please report this issue at: https://github.com/stackgen/stackgen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type StackgenResult<T> = Result<T, StackgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_categorize_as_validation() {
        let err: StackgenError = DomainError::EmptyField {
            field: "database_user",
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn template_not_found_categorizes_as_not_found() {
        let err: StackgenError = ApplicationError::TemplateNotFound {
            path: PathBuf::from("/missing.py"),
            reason: "No such file".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn suggestions_are_never_empty() {
        let err: StackgenError = ApplicationError::DirectoryNotEmpty {
            path: PathBuf::from("/tmp/x"),
        }
        .into();
        assert!(!err.suggestions().is_empty());
    }
}
