//! Error types for the goscaffold CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for goscaffold operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The requested project type is not one of the registered blueprints.
    #[error("unknown project type: {0} (expected one of: cli, web, microservice, library, tool)")]
    UnknownProjectType(String),

    /// A template body could not be parsed.
    #[error("template '{template}' is malformed at offset {position}: {reason}")]
    TemplateSyntax {
        template: String,
        position: usize,
        reason: String,
    },

    /// A template referenced data the render context does not provide.
    #[error("template '{template}' could not be rendered: {reason}")]
    TemplateExecution { template: String, reason: String },

    /// Directory or file I/O failed.
    #[error("failed to {operation} '{}': {source}", path.display())]
    Filesystem {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl ScaffoldError {
    /// Build a `Filesystem` error for `operation` on `path`.
    pub fn filesystem(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        ScaffoldError::Filesystem {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::UnknownProjectType(_) => exit_codes::USER_ERROR,
            ScaffoldError::UserError(_) => exit_codes::USER_ERROR,
            ScaffoldError::TemplateSyntax { .. } => exit_codes::TEMPLATE_FAILURE,
            ScaffoldError::TemplateExecution { .. } => exit_codes::TEMPLATE_FAILURE,
            ScaffoldError::Filesystem { .. } => exit_codes::FILESYSTEM_FAILURE,
            ScaffoldError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for goscaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn unknown_project_type_is_a_user_error() {
        let err = ScaffoldError::UnknownProjectType("desktop".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("desktop"));
    }

    #[test]
    fn template_errors_share_an_exit_code() {
        let syntax = ScaffoldError::TemplateSyntax {
            template: "main.go".to_string(),
            position: 4,
            reason: "unterminated action".to_string(),
        };
        let execution = ScaffoldError::TemplateExecution {
            template: "main.go".to_string(),
            reason: "missing field .Name".to_string(),
        };
        assert_eq!(syntax.exit_code(), exit_codes::TEMPLATE_FAILURE);
        assert_eq!(execution.exit_code(), exit_codes::TEMPLATE_FAILURE);
    }

    #[test]
    fn filesystem_error_names_operation_and_path() {
        let err = ScaffoldError::filesystem(
            "write file",
            "/tmp/x/main.go",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_code(), exit_codes::FILESYSTEM_FAILURE);
        assert_eq!(
            err.to_string(),
            "failed to write file '/tmp/x/main.go': denied"
        );
    }

    #[test]
    fn git_error_has_correct_exit_code() {
        let err = ScaffoldError::GitError("init failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
        assert_eq!(err.to_string(), "Git operation failed: init failed");
    }
}
