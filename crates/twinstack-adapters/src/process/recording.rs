//! Scripted process runner for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use twinstack_core::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::CommandLine,
    error::ScaffoldResult,
};

/// Records every invocation and answers with a scripted exit code.
///
/// Programs without a scripted code exit 0. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingProcessRunner {
    exit_codes: Arc<Mutex<HashMap<String, i32>>>,
    calls: Arc<Mutex<Vec<(CommandLine, PathBuf)>>>,
}

impl RecordingProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later run of `program` exit with `code`.
    pub fn exit_with(self, program: impl Into<String>, code: i32) -> Self {
        if let Ok(mut codes) = self.exit_codes.lock() {
            codes.insert(program.into(), code);
        }
        self
    }

    /// Invocations so far, in order, with the directory each ran in.
    pub fn calls(&self) -> Vec<(CommandLine, PathBuf)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Display form of each invocation, e.g. `npm install --save x`.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|(command, _)| command.to_string())
            .collect()
    }
}

impl ProcessRunner for RecordingProcessRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> ScaffoldResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((command.clone(), cwd.to_path_buf()));
        }

        let code = self
            .exit_codes
            .lock()
            .ok()
            .and_then(|codes| codes.get(&command.program).copied())
            .unwrap_or(0);

        if code == 0 {
            Ok(())
        } else {
            Err(ApplicationError::ProcessFailed {
                command: command.to_string(),
                code: Some(code),
            }
            .into())
        }
    }
}
