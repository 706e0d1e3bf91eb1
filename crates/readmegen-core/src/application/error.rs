//! Application layer errors.
//!
//! These are failures of orchestration and collaborators (filesystem, git,
//! template engine). Per-source manifest failures never become errors; only
//! the template read, the render and the final write can fail a run.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// A configured external template is missing.
    #[error("Template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The version-control collaborator could not answer.
    #[error("Remote lookup failed: {reason}")]
    RemoteLookup { reason: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { reason } => vec![
                format!("The template could not be rendered: {}", reason),
                "Check the Handlebars syntax of your custom template".into(),
                "Run without --template to use the built-in template".into(),
            ],
            Self::TemplateNotFound { path } => vec![
                format!("No template at: {}", path.display()),
                "Check the `template_path` setting or the --template flag".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::RemoteLookup { .. } => vec![
                "Add a remote with: git remote add origin <url>".into(),
                "Or set `github_username` and `repository_name` in the config".into(),
            ],
            Self::ValidationFailed(_) => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::RemoteLookup { .. } => ErrorCategory::Internal,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
