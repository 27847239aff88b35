//! Best-effort systemd transitions for the agent's service unit.
//!
//! Service-state transitions during teardown and reconfiguration must never
//! block the steps that follow them, so a non-zero `systemctl` exit is
//! logged and handed back as an `Ok` output the caller is free to drop.

use tracing::warn;

use crate::application::ports::{CommandOutput, CommandRunner, EnvSpec, SYSTEMD_UNIT};
use crate::domain::error::CommandError;

/// A systemd verb applied to the agent's unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOp {
    Start,
    Stop,
    Restart,
    Enable,
    Disable,
    DaemonReload,
}

impl ServiceOp {
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::DaemonReload => "daemon-reload",
        }
    }

    /// `daemon-reload` acts on the manager itself, not a unit.
    #[must_use]
    pub fn takes_unit(self) -> bool {
        !matches!(self, Self::DaemonReload)
    }
}

/// Run `systemctl <verb> [unit]`. A non-zero exit is logged with argv, exit
/// code, and stderr, then returned as a normal output; only a spawn failure
/// is an `Err`, and callers performing teardown drop that too.
///
/// # Errors
///
/// Returns `CommandError::Spawn` if `systemctl` cannot be started.
pub async fn apply(
    runner: &impl CommandRunner,
    op: ServiceOp,
) -> Result<CommandOutput, CommandError> {
    let mut argv = vec!["systemctl", op.verb()];
    if op.takes_unit() {
        argv.push(SYSTEMD_UNIT);
    }
    let output = runner.run(&argv, EnvSpec::Inherit).await?;
    if !output.success() {
        warn!(
            argv = ?argv,
            exit_code = output.exit_code,
            stderr = %output.stderr.trim(),
            "systemctl operation failed"
        );
    }
    Ok(output)
}
