//! `jobbergate-ops status` — report installed version and daemon state.

use anyhow::Result;

use crate::application::ports::CommandRunner;
use crate::application::services::snap_query;

/// Run `jobbergate-ops status`.
///
/// # Errors
///
/// Returns an error if the snap cannot be queried or the expected fields
/// are absent — there is no fallback "unknown" status.
pub async fn run(runner: &impl CommandRunner, json: bool) -> Result<()> {
    let summary = snap_query::status_summary(runner).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("version: {}", summary.version);
        println!("daemon:  {}", summary.daemon_status);
    }
    Ok(())
}
