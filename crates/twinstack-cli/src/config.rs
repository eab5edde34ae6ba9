//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the resulting
//! [`Toolchain`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags ([`AppConfig::with_overrides`])
//! 2. Environment variables, e.g. `TWINSTACK_TOOLCHAIN__PACKAGE_MANAGER=pnpm`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use twinstack_core::domain::{DomainError, Toolchain};

use crate::cli::ToolchainArgs;

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "TWINSTACK";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// External tools.
    pub toolchain: ToolchainConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    pub package_manager: String,
    pub generator_package: String,
    pub generator_bin: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        let toolchain = Toolchain::default();
        Self {
            package_manager: toolchain.package_manager().into(),
            generator_package: toolchain.generator_package().into(),
            generator_bin: toolchain.generator_executable().into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(&Self::effective_path(config_file), config_file.is_some())
    }

    /// The file [`AppConfig::load`] reads: the explicit one if given,
    /// otherwise [`AppConfig::config_path`].
    pub fn effective_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.twinstack.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "twinstack", "twinstack")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".twinstack.toml"))
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, args: &ToolchainArgs) -> Self {
        if let Some(pm) = &args.package_manager {
            self.toolchain.package_manager = pm.clone();
        }
        if let Some(pkg) = &args.generator_package {
            self.toolchain.generator_package = pkg.clone();
        }
        if let Some(bin) = &args.generator_bin {
            self.toolchain.generator_bin = bin.clone();
        }
        self
    }

    /// Validated toolchain for the core service.
    pub fn toolchain(&self) -> Result<Toolchain, DomainError> {
        Toolchain::new(
            self.toolchain.package_manager.clone(),
            self.toolchain.generator_package.clone(),
            self.toolchain.generator_bin.clone(),
        )
    }

    /// Render as TOML, the same shape the config file uses.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }
}
