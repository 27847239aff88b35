//! Shared test doubles for application services.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::application::ports::{CommandOutput, CommandRunner, EnvSpec};
use crate::domain::error::CommandError;

/// Build a successful `CommandOutput` with the given stdout.
pub fn ok_output(stdout: &str) -> CommandOutput {
    CommandOutput {
        exit_code: 0,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// Build a failed `CommandOutput` with the given exit code and stderr.
pub fn fail_output(exit_code: i32, stderr: &str) -> CommandOutput {
    CommandOutput {
        exit_code,
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

/// A `CommandRunner` that replays scripted results and records every argv.
/// When the script runs out it keeps returning empty successes.
pub struct ScriptedRunner {
    script: RefCell<VecDeque<Result<CommandOutput, CommandError>>>,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new(script: Vec<Result<CommandOutput, CommandError>>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn always_ok() -> Self {
        Self::new(Vec::new())
    }

    pub fn recorded_calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(&self, argv: &[&str], _env: EnvSpec<'_>) -> Result<CommandOutput, CommandError> {
        self.calls
            .borrow_mut()
            .push(argv.iter().map(ToString::to_string).collect());
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ok_output("")))
    }
}
