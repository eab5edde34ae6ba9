//! `twinstack --show-config`: print the effective configuration.

use std::path::Path;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Print the merged configuration (defaults, file, env, flags) as TOML.
///
/// `config_file` is the file the values were read from.
pub fn execute(config: &AppConfig, config_file: &Path, output: &OutputManager) -> CliResult<()> {
    // Invalid values are reported here rather than on the next real run.
    config.toolchain().map_err(|e| CliError::Core(e.into()))?;

    output.header(&format!(
        "# Effective configuration (file: {})",
        config_file.display()
    ))?;
    let rendered = config
        .to_toml()
        .map_err(|e| CliError::config(e, config_file))?;
    output.print(rendered.trim_end())?;
    Ok(())
}
