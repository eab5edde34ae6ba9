//! Fullstack Service - main application orchestrator.
//!
//! This service coordinates the entire bootstrap workflow:
//! 1. Create the root directory and write `package.json`
//! 2. Install the generator package, then run the generator for the client
//! 3. Create the empty `api` directory
//!
//! Each step starts only after the previous one succeeded; the first
//! failure is returned unchanged and nothing after it runs.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        events::ScaffoldEvent,
        ports::{Filesystem, ProcessRunner, ScaffoldObserver},
    },
    domain::{CommandLine, ProjectLayout, ProjectManifest, Toolchain},
    error::ScaffoldResult,
};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub layout: ProjectLayout,
    pub install_command: CommandLine,
    pub client_command: CommandLine,
}

/// Main bootstrap service.
pub struct FullstackService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
    toolchain: Toolchain,
}

impl FullstackService {
    /// Create a new service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use twinstack_core::application::FullstackService;
    /// use twinstack_core::domain::Toolchain;
    ///
    /// let service = FullstackService::new(
    ///     filesystem, // impl Filesystem
    ///     runner,     // impl ProcessRunner
    ///     Toolchain::default(),
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn ProcessRunner>,
        toolchain: Toolchain,
    ) -> Self {
        Self {
            filesystem,
            runner,
            toolchain,
        }
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Whether the project root is already present.
    ///
    /// A run against an existing root is allowed; existing files are kept
    /// and `package.json` is rewritten.
    pub fn root_exists(&self, layout: &ProjectLayout) -> bool {
        self.filesystem.exists(layout.root())
    }

    /// Bootstrap a project at `layout`.
    #[instrument(
        skip_all,
        fields(
            root = %layout.root().display(),
            app = %layout.app_name()
        )
    )]
    pub fn scaffold(
        &self,
        layout: &ProjectLayout,
        observer: &dyn ScaffoldObserver,
    ) -> ScaffoldResult<ScaffoldReport> {
        self.filesystem.create_dir_all(layout.root())?;
        observer.on_event(&ScaffoldEvent::RootReady {
            root: layout.root().to_path_buf(),
        });

        let manifest_path = self.write_manifest(layout)?;
        observer.on_event(&ScaffoldEvent::ManifestWritten {
            path: manifest_path,
        });

        let (install_command, client_command) = self.setup_client(layout, observer)?;

        let api_dir = self.create_api_placeholder(layout)?;
        observer.on_event(&ScaffoldEvent::ApiPlaceholderReady { path: api_dir });

        info!("Bootstrap completed successfully");
        observer.on_event(&ScaffoldEvent::Completed {
            app_name: layout.app_name().to_string(),
        });

        Ok(ScaffoldReport {
            layout: layout.clone(),
            install_command,
            client_command,
        })
    }

    /// Install the generator package into `root`.
    pub fn install_generator(
        &self,
        root: &Path,
        observer: &dyn ScaffoldObserver,
    ) -> ScaffoldResult<CommandLine> {
        let command = self.toolchain.install_command();
        observer.on_event(&ScaffoldEvent::InstallingGenerator {
            command: command.clone(),
        });
        info!(%command, "Installing generator");
        self.runner.run(&command, root)?;
        Ok(command)
    }

    /// Run the generator in the root to create `<app_name>-client`.
    pub fn scaffold_client(
        &self,
        layout: &ProjectLayout,
        observer: &dyn ScaffoldObserver,
    ) -> ScaffoldResult<CommandLine> {
        let command = self.toolchain.client_command(&layout.client_dir_name());
        observer.on_event(&ScaffoldEvent::ScaffoldingClient {
            command: command.clone(),
        });
        info!(%command, "Generating client application");
        self.runner.run(&command, layout.root())?;
        Ok(command)
    }

    /// Ensure `<root>/api` exists.
    pub fn create_api_placeholder(&self, layout: &ProjectLayout) -> ScaffoldResult<PathBuf> {
        let api_dir = layout.api_dir();
        self.filesystem.create_dir_all(&api_dir)?;
        debug!(path = %api_dir.display(), "API placeholder ready");
        Ok(api_dir)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_manifest(&self, layout: &ProjectLayout) -> ScaffoldResult<PathBuf> {
        let content = ProjectManifest::new(layout.app_name())
            .render()
            .map_err(|e| ApplicationError::ManifestSerialization {
                reason: e.to_string(),
            })?;
        let path = layout.manifest_path();
        self.filesystem.write_file(&path, &content)?;
        debug!(path = %path.display(), "Manifest written");
        Ok(path)
    }

    /// The client is only generated once the install succeeded.
    fn setup_client(
        &self,
        layout: &ProjectLayout,
        observer: &dyn ScaffoldObserver,
    ) -> ScaffoldResult<(CommandLine, CommandLine)> {
        let install = self.install_generator(layout.root(), observer)?;
        let client = self.scaffold_client(layout, observer)?;
        Ok((install, client))
    }
}
