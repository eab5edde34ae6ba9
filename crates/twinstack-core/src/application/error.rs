//! Application layer errors.
//!
//! These errors represent failures of the side effects being orchestrated,
//! not invalid input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the bootstrap sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// An external command ran but exited unsuccessfully.
    #[error("Command failed: {command}{}", exit_suffix(.code))]
    ProcessFailed { command: String, code: Option<i32> },

    /// An external command could not be started at all.
    #[error("Could not start '{command}': {reason}")]
    ProcessSpawn { command: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The manifest could not be serialized.
    #[error("Failed to serialize package.json: {reason}")]
    ManifestSerialization { reason: String },
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {code})"),
        None => " (terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProcessFailed { command, .. } => vec![
                format!("'{}' did not complete", command),
                "Check the command output above for details".into(),
                "Fix the problem and re-run; existing directories are reused".into(),
            ],
            Self::ProcessSpawn { command, .. } => {
                let program = command.split_whitespace().next().unwrap_or(command);
                vec![
                    format!("Ensure '{}' is installed and in your PATH", program),
                    "Or choose another tool with --package-manager / --generator-bin".into(),
                ]
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ManifestSerialization { .. } => {
                vec!["This is a bug, please report it".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProcessFailed { .. } | Self::ProcessSpawn { .. } => ErrorCategory::ExternalTool,
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::ManifestSerialization { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_failed_message_carries_command_and_code() {
        let err = ApplicationError::ProcessFailed {
            command: "npm install --save create-react-app".into(),
            code: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "Command failed: npm install --save create-react-app (exit code 1)"
        );
    }

    #[test]
    fn signal_termination_is_described() {
        let err = ApplicationError::ProcessFailed {
            command: "create-react-app x-client".into(),
            code: None,
        };
        assert!(err.to_string().ends_with("(terminated by signal)"));
    }

    #[test]
    fn spawn_suggestion_names_program_only() {
        let err = ApplicationError::ProcessSpawn {
            command: "pnpm install --save create-vite".into(),
            reason: "No such file or directory".into(),
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("'pnpm' is installed"))
        );
        assert_eq!(err.category(), ErrorCategory::ExternalTool);
    }
}
