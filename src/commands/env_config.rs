//! `jobbergate-ops env-config` — print the exact rendered env file text.

use anyhow::Result;

use crate::application::services::configure;
use crate::infra::paths::AgentPaths;

/// Run `jobbergate-ops env-config`.
///
/// # Errors
///
/// Returns an error if no configuration has been rendered yet.
pub fn run(paths: &AgentPaths) -> Result<()> {
    print!("{}", configure::env_config_text(paths)?);
    Ok(())
}
