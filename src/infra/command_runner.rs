//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for process execution. No timeout is imposed: a hung external command
//! hangs the calling operation, and the caller re-invokes the whole
//! workflow rather than resuming mid-way.

use std::io;
use std::process::Stdio;

use crate::application::ports::{owned_argv, CommandOutput, CommandRunner, EnvSpec};
use crate::domain::error::CommandError;

/// Production `CommandRunner` backed by `tokio::process`.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, argv: &[&str], env: EnvSpec<'_>) -> Result<CommandOutput, CommandError> {
        let Some((program, args)) = argv.split_first() else {
            return Err(CommandError::Spawn {
                argv: Vec::new(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "empty argv"),
            });
        };

        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let EnvSpec::Exact(vars) = env {
            cmd.env_clear();
            for (key, value) in vars {
                cmd.env(key, value);
            }
        }

        let output = cmd.output().await.map_err(|source| CommandError::Spawn {
            argv: owned_argv(argv),
            source,
        })?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
