//! Snap metadata queries: installed version and daemon run state.

use crate::application::ports::{CommandRunner, EnvSpec, DAEMON_SERVICE, SNAP_NAME};
use crate::domain::error::QueryError;
use crate::domain::snap::{SnapInfo, StatusSummary};

/// Query and parse `snap info` for the agent package.
///
/// # Errors
///
/// Returns `QueryError` if the command fails or its output cannot be parsed.
pub async fn snap_info(runner: &impl CommandRunner) -> Result<SnapInfo, QueryError> {
    let argv = ["snap", "info", SNAP_NAME];
    let output = runner
        .run(&argv, EnvSpec::Inherit)
        .await?
        .require_success(&argv)?;
    SnapInfo::parse(&output.stdout)
}

/// The run state reported for the agent daemon, e.g. `active`.
///
/// # Errors
///
/// Returns `QueryError::MissingField` if the `services` entry is absent —
/// never a placeholder status.
pub async fn daemon_status(runner: &impl CommandRunner) -> Result<String, QueryError> {
    snap_info(runner).await?.service_status(DAEMON_SERVICE)
}

/// The installed snap version.
///
/// # Errors
///
/// Returns `QueryError::MissingField` if the `installed` field is absent.
pub async fn installed_version(runner: &impl CommandRunner) -> Result<String, QueryError> {
    snap_info(runner).await?.installed_version()
}

/// Version and daemon status composed for reporting. Failures propagate
/// unchanged; there is no default status string.
///
/// # Errors
///
/// Returns `QueryError` if the query fails or either field is absent.
pub async fn status_summary(runner: &impl CommandRunner) -> Result<StatusSummary, QueryError> {
    let info = snap_info(runner).await?;
    Ok(StatusSummary {
        version: info.installed_version()?,
        daemon_status: info.service_status(DAEMON_SERVICE)?,
    })
}
