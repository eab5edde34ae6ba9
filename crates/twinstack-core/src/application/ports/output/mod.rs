//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `twinstack-adapters` crate provides implementations; the CLI provides
//! the observer.

use std::path::Path;

use crate::application::events::ScaffoldEvent;
use crate::domain::CommandLine;
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `twinstack_adapters::filesystem::LocalFilesystem` (production)
/// - `twinstack_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for running external programs.
///
/// Implemented by:
/// - `twinstack_adapters::process::SystemProcessRunner` (production)
/// - `twinstack_adapters::process::RecordingProcessRunner` (testing)
///
/// Implementations run the command to completion in `cwd` with the
/// terminal's stdio attached. A non-zero exit is an error; nothing is
/// retried.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    fn run(&self, command: &CommandLine, cwd: &Path) -> ScaffoldResult<()>;
}

/// Port for progress reporting.
///
/// The service never prints; front-ends decide what a user sees.
pub trait ScaffoldObserver {
    fn on_event(&self, event: &ScaffoldEvent);
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScaffoldObserver for NoopObserver {
    fn on_event(&self, _event: &ScaffoldEvent) {}
}
