//! Progress events emitted by [`FullstackService`](super::FullstackService).

use std::path::PathBuf;

use crate::domain::CommandLine;

/// One milestone of the bootstrap sequence, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// The root directory exists.
    RootReady { root: PathBuf },
    /// `package.json` was written.
    ManifestWritten { path: PathBuf },
    /// About to run the package manager.
    InstallingGenerator { command: CommandLine },
    /// About to run the generator.
    ScaffoldingClient { command: CommandLine },
    /// The `api` directory exists.
    ApiPlaceholderReady { path: PathBuf },
    /// Every step succeeded.
    Completed { app_name: String },
}
