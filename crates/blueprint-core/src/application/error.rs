//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::{domain::ValidationError, error::ErrorCategory};

/// Errors that occur during generator orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A pre-supplied answer failed its validator and nobody can be re-asked.
    #[error("Answer for '{key}' rejected: {reason}")]
    AnswerRejected { key: String, reason: ValidationError },

    /// A pre-supplied answer set has no value for a question.
    #[error("No answer provided for '{key}'")]
    MissingAnswer { key: String },

    /// The prompt itself failed (terminal closed, interrupted, ...).
    #[error("Prompt for '{key}' failed: {reason}")]
    PromptFailed { key: String, reason: String },

    /// In-memory adapter lock poisoned.
    #[error("Adapter lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Pass --dest to point at the architecture folder".into(),
            ],
            Self::AnswerRejected { key, reason } => vec![
                format!("'{}': {}", key, reason),
                "Fix the value in the answers file and try again".into(),
            ],
            Self::MissingAnswer { key } => vec![
                format!("Add a \"{}\" entry to the answers file", key),
                "Or run without --answers to be prompted".into(),
            ],
            Self::PromptFailed { .. } => vec!["Run again from an interactive terminal".into()],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::AnswerRejected { .. } | Self::MissingAnswer { .. } => ErrorCategory::Validation,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
