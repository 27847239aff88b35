//! `jobbergate-ops install` — install the agent snap and report its state.

use anyhow::Result;
use clap::Args;

use crate::application::ports::CommandRunner;
use crate::application::services::{lifecycle, snap_query};

#[derive(Args)]
pub struct InstallArgs {
    /// Snap channel to install from
    #[arg(long, default_value = "stable")]
    pub channel: String,
}

/// Run `jobbergate-ops install`.
///
/// # Errors
///
/// Returns an error if the install command fails or the installed snap
/// cannot be queried afterwards.
pub async fn run(runner: &impl CommandRunner, args: &InstallArgs) -> Result<()> {
    lifecycle::install(runner, &args.channel).await?;
    let summary = snap_query::status_summary(runner).await?;
    println!(
        "Installed jobbergate-agent {} (daemon: {})",
        summary.version, summary.daemon_status
    );
    Ok(())
}
