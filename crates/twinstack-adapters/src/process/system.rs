//! Real process runner using `std::process::Command`.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};
use twinstack_core::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::CommandLine,
    error::ScaffoldResult,
};

/// Runs commands with the terminal's stdin/stdout/stderr attached, so the
/// package manager's prompts and progress output stay visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> ScaffoldResult<()> {
        debug!(%command, cwd = %cwd.display(), "Spawning");

        let status = build_command(command, cwd)?
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::ProcessSpawn {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if status.success() {
            debug!(%command, "Exited successfully");
            return Ok(());
        }

        warn!(%command, code = ?status.code(), "Exited unsuccessfully");
        Err(ApplicationError::ProcessFailed {
            command: command.to_string(),
            code: status.code(),
        }
        .into())
    }
}

/// Resolve the program against `PATH` (and `cwd` for relative paths)
/// before spawning.
///
/// On Windows this turns `npm` into the full path of `npm.cmd`. Spawning
/// the shim directly lets std apply its batch-file argument quoting, so
/// shell metacharacters in a project name reach the tool as one argument.
fn build_command(command: &CommandLine, cwd: &Path) -> ScaffoldResult<Command> {
    let program = which::which_in(&command.program, std::env::var_os("PATH"), cwd).map_err(
        |e| ApplicationError::ProcessSpawn {
            command: command.to_string(),
            reason: e.to_string(),
        },
    )?;
    debug!(program = %program.display(), "Resolved executable");

    let mut cmd = Command::new(program);
    cmd.args(&command.args);
    Ok(cmd)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use twinstack_core::error::ScaffoldError;

    fn sh(script: &str) -> CommandLine {
        CommandLine::new("sh", ["-c", script])
    }

    #[test]
    fn zero_exit_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        SystemProcessRunner::new()
            .run(&CommandLine::new("true", Vec::<String>::new()), tmp.path())
            .unwrap();
    }

    #[test]
    fn non_zero_exit_carries_command_and_code() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SystemProcessRunner::new()
            .run(&sh("exit 3"), tmp.path())
            .unwrap_err();
        assert_eq!(
            err,
            ScaffoldError::Application(ApplicationError::ProcessFailed {
                command: "sh -c exit 3".into(),
                code: Some(3),
            })
        );
    }

    #[test]
    fn runs_in_given_directory() {
        let tmp = tempfile::tempdir().unwrap();
        SystemProcessRunner::new()
            .run(&sh("mkdir from-child"), tmp.path())
            .unwrap();
        assert!(tmp.path().join("from-child").is_dir());
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SystemProcessRunner::new()
            .run(
                &CommandLine::new("twinstack-definitely-not-installed", ["x"]),
                tmp.path(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::ProcessSpawn { .. })
        ));
    }
}
