//! `jobbergate-ops start|stop|restart` — service transitions, and
//! `clear-cache` — drop the agent's cache directory.

use anyhow::Result;

use crate::application::ports::{CommandRunner, SYSTEMD_UNIT};
use crate::application::services::configure::{self, CacheClearResult};
use crate::application::services::systemctl::{self, ServiceOp};
use crate::infra::paths::AgentPaths;

/// Run a service transition. A refused transition is reported but does not
/// fail the command; only an unspawnable `systemctl` is an error.
///
/// # Errors
///
/// Returns an error if `systemctl` cannot be started at all.
pub async fn run(runner: &impl CommandRunner, op: ServiceOp) -> Result<()> {
    let output = systemctl::apply(runner, op).await?;
    if output.success() {
        println!("{} {SYSTEMD_UNIT}: done", op.verb());
    } else {
        println!(
            "{} {SYSTEMD_UNIT}: exited {} (see logs)",
            op.verb(),
            output.exit_code
        );
    }
    Ok(())
}

/// Run `jobbergate-ops clear-cache`.
pub fn clear_cache(paths: &AgentPaths) {
    match configure::clear_cache(paths) {
        CacheClearResult::Cleared => println!("Cache cleared"),
        CacheClearResult::NotPresent => println!("Cache dir doesn't exist. Skipping."),
    }
}
