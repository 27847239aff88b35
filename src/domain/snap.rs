//! Parsed `snap info` metadata.
//!
//! `snap info <name>` prints a YAML-ish key/value document; the fields this
//! crate cares about are `installed` (whose first whitespace token is the
//! version) and the `services` mapping (whose per-service value's first
//! comma token is the run state, e.g. `active`). Missing fields are explicit
//! errors — a default "unknown" would mask a broken install.

use serde::Serialize;
use serde_yaml::Value;

use crate::domain::error::QueryError;

/// Parsed snap package metadata.
#[derive(Debug, Clone)]
pub struct SnapInfo {
    doc: Value,
}

impl SnapInfo {
    /// Parse the raw `snap info` output.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Parse` if the text is not a YAML mapping.
    pub fn parse(text: &str) -> Result<Self, QueryError> {
        let doc: Value = serde_yaml::from_str(text)?;
        Ok(Self { doc })
    }

    /// The installed version: first whitespace token of the `installed` field.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::MissingField` if `installed` is absent or empty.
    pub fn installed_version(&self) -> Result<String, QueryError> {
        self.doc
            .get("installed")
            .and_then(Value::as_str)
            .and_then(|v| v.split_whitespace().next())
            .map(ToString::to_string)
            .ok_or_else(|| QueryError::MissingField {
                field: "installed".to_string(),
            })
    }

    /// The run state of `service`: first comma token of its `services` entry.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::MissingField` if `services` or the service entry
    /// is absent.
    pub fn service_status(&self, service: &str) -> Result<String, QueryError> {
        let services = self
            .doc
            .get("services")
            .ok_or_else(|| QueryError::MissingField {
                field: "services".to_string(),
            })?;
        services
            .get(service)
            .and_then(Value::as_str)
            .and_then(|v| v.split(',').next())
            .map(|state| state.trim().to_string())
            .ok_or_else(|| QueryError::MissingField {
                field: format!("services.{service}"),
            })
    }
}

/// Version and daemon run state, composed for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSummary {
    pub version: String,
    pub daemon_status: String,
}
