//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`
//! or `crate::commands`.

use crate::domain::error::CommandError;

// ── Constants ─────────────────────────────────────────────────────────────────

/// The snap package this tool manages.
pub const SNAP_NAME: &str = "jobbergate-agent";

/// The `services` key under which `snap info` reports the agent daemon.
pub const DAEMON_SERVICE: &str = "jobbergate-agent.daemon";

/// The systemd unit all service transitions target.
pub const SYSTEMD_UNIT: &str = "jobbergate-agent.service";

// ── Value Types ───────────────────────────────────────────────────────────────

/// Environment to run an external command under.
#[derive(Debug, Clone, Copy)]
pub enum EnvSpec<'a> {
    /// Pass the parent environment through unchanged.
    Inherit,
    /// Clear the environment and set exactly these variables. An empty list
    /// is a deliberate "inherit nothing" sandbox, not an omission.
    Exact(&'a [(&'a str, &'a str)]),
}

/// Captured result of one command invocation. Never partially populated.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code; `-1` when the process was killed by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Map a non-zero exit to `CommandError::Failed` carrying argv and stderr.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Failed` if the command exited non-zero.
    pub fn require_success(self, argv: &[&str]) -> Result<Self, CommandError> {
        if self.success() {
            Ok(self)
        } else {
            Err(CommandError::Failed {
                argv: owned_argv(argv),
                exit_code: self.exit_code,
                stderr: self.stderr,
            })
        }
    }
}

/// Clone argv into owned strings for error values.
#[must_use]
pub fn owned_argv(argv: &[&str]) -> Vec<String> {
    argv.iter().map(ToString::to_string).collect()
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `argv` under `env`, capturing exit code, stdout, and stderr.
    ///
    /// Always returns an output when the process could be spawned, whatever
    /// its exit code; callers that require success apply
    /// [`CommandOutput::require_success`]. No retries, no timeout.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Spawn` if the process cannot be started.
    async fn run(&self, argv: &[&str], env: EnvSpec<'_>) -> Result<CommandOutput, CommandError>;
}
