// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Template set construction
    // ========================================================================
    #[error("Duplicate template path: {path}")]
    DuplicateTemplatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Action resolution
    // ========================================================================
    #[error("Template not found: {path}")]
    TemplateNotFound { path: String },

    #[error("Failed to compile template '{template}': {reason}")]
    TemplateError { template: String, reason: String },

    #[error("Insertion point /{pattern}/ not found in {path}")]
    InsertionPointNotFound { path: String, pattern: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ========================================================================
    // Workspace document
    // ========================================================================
    #[error("Malformed workspace document {path}: {reason}")]
    WorkspaceParse { path: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path } => vec![
                format!("No bundled template at '{}'", path),
                "Check the generator definition or the --templates directory".into(),
            ],
            Self::TemplateError { template, .. } => vec![
                format!("Template '{}' references an unknown answer", template),
                "Every {{placeholder}} must match a question key".into(),
            ],
            Self::InsertionPointNotFound { path, pattern } => vec![
                format!("'{}' has no line matching /{}/", path, pattern),
                "Restore the marker comment in the file and try again".into(),
            ],
            Self::WorkspaceParse { path, .. } => vec![
                format!("Could not read '{}'", path),
                "Re-export the workspace JSON or delete it to skip model checks".into(),
            ],
            Self::DuplicateTemplatePath { path } => vec![
                format!("Two templates share the path '{}'", path),
                "Rename one of them in the templates directory".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::InsertionPointNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::DuplicateTemplatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::InvalidPattern { .. }
            | Self::WorkspaceParse { .. } => ErrorCategory::Validation,
            Self::TemplateError { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
