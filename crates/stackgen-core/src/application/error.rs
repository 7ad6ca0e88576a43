//! Application layer errors.
//!
//! These errors represent failures in orchestration, not request
//! validation. Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing the artifact set.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target directory pre-exists with content. Raised before any
    /// write happens.
    #[error("target directory is not empty: {path}")]
    DirectoryNotEmpty { path: PathBuf },

    /// The selected template could not be resolved or read. May surface
    /// after other artifacts were already written (no rollback).
    #[error("template not found at {path}: {reason}")]
    TemplateNotFound { path: PathBuf, reason: String },

    /// A filesystem write failed (permissions, disk full, path too long).
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryNotEmpty { path } => vec![
                format!("The directory '{}' already contains files", path.display()),
                "Choose a different target directory".into(),
                "Or clean the directory first; no files were written".into(),
            ],
            Self::TemplateNotFound { path, .. } => vec![
                format!("Could not read a template at: {}", path.display()),
                "Use a builtin id (default:simple, default:multiple) or an existing file".into(),
                "Note: earlier artifacts may already have been written".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryNotEmpty { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
