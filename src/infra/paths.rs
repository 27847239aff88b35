//! Filesystem locations owned by the managed agent.
//!
//! All paths are carried on one immutable struct instead of module-level
//! constants so tests can point every operation at a temporary directory.

use std::path::{Path, PathBuf};

/// Locations of the agent's data directory and systemd unit file.
#[derive(Debug, Clone)]
pub struct AgentPaths {
    common_dir: PathBuf,
    unit_file: PathBuf,
}

impl AgentPaths {
    /// The production system locations.
    #[must_use]
    pub fn system() -> Self {
        Self {
            common_dir: PathBuf::from("/var/snap/jobbergate-agent/common"),
            unit_file: PathBuf::from("/etc/systemd/system/jobbergate-agent.service"),
        }
    }

    #[must_use]
    pub fn new(common_dir: impl Into<PathBuf>, unit_file: impl Into<PathBuf>) -> Self {
        Self {
            common_dir: common_dir.into(),
            unit_file: unit_file.into(),
        }
    }

    /// The snap's writable data directory.
    #[must_use]
    pub fn common_dir(&self) -> &Path {
        &self.common_dir
    }

    /// The rendered env config file consumed by the agent at startup.
    #[must_use]
    pub fn env_file(&self) -> PathBuf {
        self.common_dir.join(".env")
    }

    /// The agent's cache directory; contents are recreated lazily by the
    /// agent, so this tool may delete it whenever configuration changes.
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.common_dir.join(".cache")
    }

    /// The systemd unit definition file removed on teardown.
    #[must_use]
    pub fn unit_file(&self) -> &Path {
        &self.unit_file
    }
}
