//! `jobbergate-ops remove` — tear down the agent's footprint.

use anyhow::Result;

use crate::application::ports::CommandRunner;
use crate::application::services::lifecycle;
use crate::infra::paths::AgentPaths;

/// Run `jobbergate-ops remove`.
///
/// # Errors
///
/// Returns an error if a file or directory this tool owns cannot be
/// deleted. Service-stop failures are logged and do not abort the removal.
pub async fn run(runner: &impl CommandRunner, paths: &AgentPaths) -> Result<()> {
    lifecycle::remove(runner, paths).await?;
    println!("jobbergate-agent removed.");
    Ok(())
}
