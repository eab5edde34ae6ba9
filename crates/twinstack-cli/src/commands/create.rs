//! The default command: bootstrap a project directory.
//!
//! Responsibility: resolve the argument and toolchain, call the core
//! service, and show progress. No sequencing logic lives here.

use tracing::{debug, info, instrument, warn};

use twinstack_adapters::{LocalFilesystem, SystemProcessRunner};
use twinstack_core::{
    application::{FullstackService, ScaffoldEvent, ScaffoldObserver},
    domain::ProjectLayout,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute a bootstrap run.
///
/// Dispatch sequence:
/// 1. Validate the toolchain (config + flags)
/// 2. Resolve the project directory against the current directory
/// 3. Run the service, printing the status and completion lines
#[instrument(skip_all, fields(project = %project_directory))]
pub fn execute(project_directory: &str, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let toolchain = config.toolchain().map_err(|e| CliError::Core(e.into()))?;
    debug!(
        package_manager = toolchain.package_manager(),
        generator_package = toolchain.generator_package(),
        generator = toolchain.generator_executable(),
        color = output.supports_color(),
        "Toolchain resolved"
    );

    let cwd = std::env::current_dir()
        .with_cli_context(|| "Failed to determine the current directory")?;
    let layout =
        ProjectLayout::resolve(&cwd, project_directory).map_err(|e| CliError::Core(e.into()))?;

    let service = FullstackService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemProcessRunner::new()),
        toolchain,
    );

    if service.root_exists(&layout) {
        output.warning(&format!(
            "{} already exists; existing files are kept and package.json is rewritten",
            layout.root().display()
        ))?;
    }

    info!(root = %layout.root().display(), "Bootstrap started");
    let report = service.scaffold(&layout, &TerminalObserver { output: &output })?;
    info!(
        client = %report.layout.client_dir().display(),
        api = %report.layout.api_dir().display(),
        "Bootstrap finished"
    );

    Ok(())
}

/// Prints the two user-facing lines; everything else goes to the log.
struct TerminalObserver<'a> {
    output: &'a OutputManager,
}

impl TerminalObserver<'_> {
    fn render(&self, event: &ScaffoldEvent) -> std::io::Result<()> {
        match event {
            ScaffoldEvent::RootReady { root } => {
                self.output.print(&format!(
                    "Creating fullstack environment in {}",
                    self.output.highlight(&root.display().to_string())
                ))?;
                self.output.print("")
            }
            ScaffoldEvent::Completed { app_name } => {
                self.output.success(&format!("{app_name} installed!"))
            }
            ScaffoldEvent::ManifestWritten { path } | ScaffoldEvent::ApiPlaceholderReady { path } => {
                debug!(path = %path.display(), "Step finished");
                Ok(())
            }
            ScaffoldEvent::InstallingGenerator { command }
            | ScaffoldEvent::ScaffoldingClient { command } => {
                debug!(%command, "Running");
                Ok(())
            }
        }
    }
}

impl ScaffoldObserver for TerminalObserver<'_> {
    fn on_event(&self, event: &ScaffoldEvent) {
        if let Err(e) = self.render(event) {
            warn!(error = %e, "Failed to write progress to the terminal");
        }
    }
}
