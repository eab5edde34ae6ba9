//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "twinstack",
    bin_name = "twinstack",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bootstrap a full-stack project: generated client + API placeholder",
    long_about = "twinstack creates a project directory with a package.json, installs a \
                  scaffolding generator (create-react-app by default), generates \
                  <name>-client with it and adds an empty api/ directory.",
    after_help = "EXAMPLES:\n\
        \x20 twinstack my-app\n\
        \x20 twinstack ./apps/shop --package-manager pnpm\n\
        \x20 twinstack blog --generator-package create-next-app --generator-bin create-next-app\n\
        \x20 twinstack --completions bash > ~/.local/share/bash-completion/completions/twinstack",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Directory to create.  A plain name creates `./name`; the last path
    /// segment becomes the app name.
    #[arg(
        value_name = "PROJECT-DIRECTORY",
        required_unless_present_any = ["completions", "show_config"],
        help = "Project directory to create"
    )]
    pub project_directory: Option<String>,

    /// Toolchain overrides.
    #[command(flatten)]
    pub toolchain: ToolchainArgs,

    /// Print the effective configuration and exit.
    #[arg(
        long = "show-config",
        conflicts_with = "completions",
        help = "Print the effective configuration as TOML and exit"
    )]
    pub show_config: bool,

    /// Print a shell completion script and exit.
    #[arg(
        long = "completions",
        value_enum,
        value_name = "SHELL",
        help = "Generate shell completions and exit"
    )]
    pub completions: Option<Shell>,
}

// ── toolchain overrides ───────────────────────────────────────────────────────

/// Flags that override the `[toolchain]` configuration section.
#[derive(Debug, Default, Args)]
pub struct ToolchainArgs {
    /// Package manager used to install the generator.
    #[arg(
        long = "package-manager",
        value_name = "BIN",
        help = "Package manager executable (default: npm)"
    )]
    pub package_manager: Option<String>,

    /// Package that provides the generator.
    #[arg(
        long = "generator-package",
        value_name = "NAME",
        help = "Generator package to install (default: create-react-app)"
    )]
    pub generator_package: Option<String>,

    /// Executable that generates the client.
    #[arg(
        long = "generator-bin",
        value_name = "BIN",
        help = "Generator executable (default: create-react-app)"
    )]
    pub generator_bin: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_project_directory() {
        let cli = Cli::parse_from(["twinstack", "myapp"]);
        assert_eq!(cli.project_directory.as_deref(), Some("myapp"));
        assert!(!cli.show_config);
        assert!(cli.completions.is_none());
    }

    #[test]
    fn project_directory_is_required() {
        let result = Cli::try_parse_from(["twinstack", "--package-manager", "pnpm"]);
        assert!(result.is_err());
    }

    #[test]
    fn completions_without_project_directory() {
        let cli = Cli::parse_from(["twinstack", "--completions", "zsh"]);
        assert!(matches!(cli.completions, Some(Shell::Zsh)));
        assert!(cli.project_directory.is_none());
    }

    #[test]
    fn show_config_without_project_directory() {
        let cli = Cli::parse_from(["twinstack", "--show-config"]);
        assert!(cli.show_config);
    }

    #[test]
    fn toolchain_overrides_parse() {
        let cli = Cli::parse_from([
            "twinstack",
            "shop",
            "--package-manager",
            "pnpm",
            "--generator-package",
            "create-vite",
            "--generator-bin",
            "create-vite",
        ]);
        assert_eq!(cli.toolchain.package_manager.as_deref(), Some("pnpm"));
        assert_eq!(cli.toolchain.generator_package.as_deref(), Some("create-vite"));
        assert_eq!(cli.toolchain.generator_bin.as_deref(), Some("create-vite"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["twinstack", "--quiet", "--verbose", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::parse_from(["twinstack", "-vv", "x"]);
        assert_eq!(cli.global.verbose, 2);
    }
}
