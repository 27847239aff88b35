//! Install and teardown orchestration for the agent snap.
//!
//! Nothing here retries internally: a failed step surfaces its typed error
//! and the caller re-invokes the whole workflow later.

use tracing::info;

use crate::application::ports::{CommandRunner, EnvSpec, SNAP_NAME};
use crate::application::services::systemctl::{self, ServiceOp};
use crate::domain::error::{InstallError, RemoveError};
use crate::infra::paths::AgentPaths;

/// Install the agent snap from `channel` in classic confinement.
///
/// # Errors
///
/// Returns `InstallError` when the install command cannot be spawned or
/// exits non-zero. The caller retries the whole operation on a later
/// trigger; there is no internal retry loop or backoff.
pub async fn install(runner: &impl CommandRunner, channel: &str) -> Result<(), InstallError> {
    let argv = ["snap", "install", SNAP_NAME, "--channel", channel, "--classic"];
    info!(channel, "installing {SNAP_NAME} snap");
    runner
        .run(&argv, EnvSpec::Inherit)
        .await
        .and_then(|output| output.require_success(&argv))
        .map_err(|source| InstallError {
            channel: channel.to_string(),
            source,
        })?;
    Ok(())
}

/// Tear down everything this tool created.
///
/// Stops and disables the unit best-effort (a failed stop must not block
/// the rest of the teardown), removes the unit definition if present,
/// reloads systemd, then deletes the agent's data directory. The stop comes
/// first so a running process cannot write into a directory being removed.
///
/// # Errors
///
/// Returns `RemoveError` on a filesystem failure; command failures during
/// the systemd steps are logged and ignored.
pub async fn remove(runner: &impl CommandRunner, paths: &AgentPaths) -> Result<(), RemoveError> {
    let _ = systemctl::apply(runner, ServiceOp::Stop).await;
    let _ = systemctl::apply(runner, ServiceOp::Disable).await;

    let unit = paths.unit_file();
    if unit.exists() {
        std::fs::remove_file(unit).map_err(|source| RemoveError::UnitFile {
            path: unit.to_path_buf(),
            source,
        })?;
    }
    let _ = systemctl::apply(runner, ServiceOp::DaemonReload).await;

    let common = paths.common_dir();
    if common.exists() {
        std::fs::remove_dir_all(common).map_err(|source| RemoveError::DataDir {
            path: common.to_path_buf(),
            source,
        })?;
    }
    info!("{SNAP_NAME} removed");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{fail_output, ScriptedRunner};

    fn temp_paths(dir: &tempfile::TempDir) -> AgentPaths {
        AgentPaths::new(
            dir.path().join("common"),
            dir.path().join("jobbergate-agent.service"),
        )
    }

    #[tokio::test]
    async fn install_passes_channel_verbatim() {
        let runner = ScriptedRunner::always_ok();
        install(&runner, "edge").await.expect("install");
        assert_eq!(
            runner.recorded_calls(),
            vec![vec![
                "snap".to_string(),
                "install".to_string(),
                "jobbergate-agent".to_string(),
                "--channel".to_string(),
                "edge".to_string(),
                "--classic".to_string(),
            ]]
        );
    }

    #[tokio::test]
    async fn install_failure_carries_channel_and_detail() {
        let runner = ScriptedRunner::new(vec![Ok(fail_output(1, "channel not found"))]);
        let err = install(&runner, "nope").await.expect_err("expected Err");
        assert_eq!(err.channel, "nope");
        assert!(err.to_string().contains("channel not found"));
    }

    #[tokio::test]
    async fn remove_stops_before_deleting() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = temp_paths(&dir);
        std::fs::create_dir_all(paths.common_dir()).expect("mkdir");
        std::fs::write(paths.env_file(), "JOBBERGATE_AGENT_CACHE_DIR=x\n").expect("write");
        std::fs::write(paths.unit_file(), "[Unit]\n").expect("write");

        let runner = ScriptedRunner::always_ok();
        remove(&runner, &paths).await.expect("remove");

        let verbs: Vec<String> = runner
            .recorded_calls()
            .iter()
            .map(|argv| argv[1].clone())
            .collect();
        assert_eq!(verbs, vec!["stop", "disable", "daemon-reload"]);
        assert!(!paths.unit_file().exists());
        assert!(!paths.common_dir().exists());
    }

    #[tokio::test]
    async fn remove_proceeds_past_failed_stop() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = temp_paths(&dir);
        std::fs::create_dir_all(paths.common_dir()).expect("mkdir");

        let runner = ScriptedRunner::new(vec![Ok(fail_output(1, "unit not loaded"))]);
        remove(&runner, &paths).await.expect("remove");
        assert!(!paths.common_dir().exists());
        assert_eq!(runner.recorded_calls().len(), 3);
    }

    #[tokio::test]
    async fn remove_is_fine_with_nothing_installed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = temp_paths(&dir);
        let runner = ScriptedRunner::always_ok();
        remove(&runner, &paths).await.expect("remove");
    }
}
