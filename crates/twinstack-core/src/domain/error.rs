// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are raised before any side effect happens: they describe
/// input that can never produce a valid project layout or toolchain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid project directory '{input}': {reason}")]
    InvalidProjectDirectory { input: String, reason: String },

    #[error("Invalid toolchain setting '{field}': {reason}")]
    InvalidToolchain { field: &'static str, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectDirectory { input, reason } => vec![
                format!("'{}' cannot be used as a project directory: {}", input, reason),
                "Pass a directory name such as: twinstack my-app".into(),
                "Relative paths work too: twinstack ./apps/my-app".into(),
            ],
            Self::InvalidToolchain { field, .. } => vec![
                format!("Check the '{}' value in your configuration", field),
                "Command-line flags override the config file".into(),
                "Run: twinstack --show-config".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectDirectory { .. } => ErrorCategory::Validation,
            Self::InvalidToolchain { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Domain error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
