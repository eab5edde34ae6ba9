//! # twinstack CLI
//!
//! Bootstraps a full-stack project: `package.json`, a generated client
//! application and an empty `api/` directory.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Load configuration (defaults + file + env), then apply flags.
//! 3. Build the [`OutputManager`]; its colour decision also drives logs
//!    and diagnostics.
//! 4. Initialise the tracing subscriber (logging).
//! 5. Dispatch: completions, show-config, or a bootstrap run.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Internal / filesystem error      |
//! |  2   | User / input error               |
//! |  4   | Configuration error              |
//! |  5   | External tool failed or missing  |

use std::io::IsTerminal as _;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap renders its own help/version/usage errors and picks the exit code
    // (0 for --help/--version, 2 for usage errors).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let verbose = cli.global.verbose > 0;
    let stderr_is_terminal = std::io::stderr().is_terminal();
    let config_file = AppConfig::effective_path(cli.global.config.as_ref());

    // ── 2. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg.with_overrides(&cli.toolchain),
        Err(e) => {
            // No usable config: the flags alone decide on colour.
            let output = OutputManager::new(&cli.global, &AppConfig::default());
            let plain = !stderr_color(&output, stderr_is_terminal);
            return handle_error(CliError::config(e, &config_file), verbose, plain);
        }
    };

    // ── 3. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let color = stderr_color(&output, stderr_is_terminal);

    // ── 4. Initialise tracing ─────────────────────────────────────────────
    let _log_guard = match init_logging(&cli.global, color) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        color,
        config_file = %config_file.display(),
        "CLI started"
    );

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, &config_file, output) {
        Ok(()) => {
            info!("twinstack completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, !color),
    }
}

/// Colour for stderr (logs and diagnostics): the output decision, and only
/// when stderr is a terminal.
fn stderr_color(output: &OutputManager, stderr_is_terminal: bool) -> bool {
    output.supports_color() && stderr_is_terminal
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, config_file: &Path, output: OutputManager) -> CliResult<()> {
    if let Some(shell) = cli.completions {
        return commands::completions::execute(shell);
    }
    if cli.show_config {
        return commands::show_config::execute(&config, config_file, &output);
    }

    let project_directory = cli.project_directory.ok_or_else(|| CliError::InvalidInput {
        message: "missing <PROJECT-DIRECTORY>".into(),
        source: None,
    })?;
    commands::create::execute(&project_directory, config, output)
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, verbose: bool, plain: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout
    let msg = if plain {
        err.format_plain(verbose)
    } else {
        err.format_colored(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
