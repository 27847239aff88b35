//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Command errors ────────────────────────────────────────────────────────────

/// Errors from executing an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The process could not be spawned (binary not found, permission denied).
    #[error("failed to spawn `{}`: {source}", .argv.join(" "))]
    Spawn {
        argv: Vec<String>,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited non-zero and the caller required success.
    #[error("`{}` exited with code {exit_code}: {}", .argv.join(" "), .stderr.trim())]
    Failed {
        argv: Vec<String>,
        exit_code: i32,
        stderr: String,
    },
}

// ── Snap query errors ─────────────────────────────────────────────────────────

/// Errors from querying and parsing snap package metadata.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("cannot parse snap info output: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Required field absent from the parsed structure. Callers must not
    /// substitute a default: a missing field means a broken install.
    #[error("snap info output is missing the `{field}` field")]
    MissingField { field: String },
}

// ── Configuration errors ──────────────────────────────────────────────────────

/// Errors from rendering or reading the agent's env config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting is empty or absent. Nothing is written.
    #[error("configure {} to continue", .missing.join(" and "))]
    Incomplete { missing: Vec<&'static str> },

    #[error("cannot write {}: {source}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ── Lifecycle errors ──────────────────────────────────────────────────────────

/// The snap install command failed.
#[derive(Debug, Error)]
#[error("snap install from channel `{channel}` failed: {source}")]
pub struct InstallError {
    pub channel: String,
    #[source]
    pub source: CommandError,
}

/// Filesystem failures while removing the agent's footprint.
#[derive(Debug, Error)]
pub enum RemoveError {
    #[error("cannot remove unit file {}: {source}", .path.display())]
    UnitFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot remove data directory {}: {source}", .path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
