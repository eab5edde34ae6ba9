//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, Shell};

pub fn execute(shell: Shell) -> crate::error::CliResult<()> {
    let mut cmd = Cli::command();
    let out = &mut std::io::stdout();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, "twinstack", out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, "twinstack", out),
        Shell::Fish => generate(shells::Fish, &mut cmd, "twinstack", out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, "twinstack", out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, "twinstack", out),
    };

    Ok(())
}
