//! Agent settings: the flat key/value configuration set and the env-file
//! rendering rules.
//!
//! Settings arrive as kebab-case names with string values. Rendering maps
//! each non-empty setting to one `JOBBERGATE_AGENT_<UPPER_SNAKE>=<value>`
//! line; an empty value means "unset" and is excluded. The rendered file
//! always ends with a derived cache-dir line so the agent and this tool
//! agree on the cache location.

use std::path::Path;

/// Prefix applied to every rendered env variable.
pub const ENV_PREFIX: &str = "JOBBERGATE_AGENT_";

/// Key of the derived trailing cache-dir entry.
pub const CACHE_DIR_KEY: &str = "CACHE_DIR";

/// Allow-list of recognized setting names, in render order.
pub const RECOGNIZED_SETTINGS: [&str; 11] = [
    "base-api-url",
    "sbatch-path",
    "scontrol-path",
    "sentry-dsn",
    "oidc-domain",
    "oidc-client-id",
    "oidc-client-secret",
    "slurm-user-mapper",
    "task-jobs-interval-seconds",
    "task-garbage-collection-hour",
    "write-submission-files",
];

/// Settings that must be non-empty before anything is rendered.
pub const REQUIRED_SETTINGS: [&str; 2] = ["oidc-client-id", "oidc-client-secret"];

/// An ordered setting-name → value map. Keys are unique; setting an existing
/// key replaces its value in place, preserving first-insertion order so
/// rendered output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct ConfigSet {
    entries: Vec<(String, String)>,
}

impl ConfigSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.set(k, v);
        }
        set
    }
}

/// Map a kebab-case setting name to its env-var key: `-` → `_`, upper-cased.
#[must_use]
pub fn env_key(key: &str) -> String {
    key.replace('-', "_").to_uppercase()
}

/// Render the full env-file text for `settings`.
///
/// Emits the optional header, one prefixed line per non-empty setting in map
/// order, then the trailing cache-dir line. The result is the complete file
/// content; callers overwrite the previous file rather than patching it.
#[must_use]
pub fn render_env(settings: &ConfigSet, header: Option<&str>, cache_dir: &Path) -> String {
    let mut out = String::new();
    if let Some(header) = header {
        out.push_str(header);
        out.push('\n');
    }
    for (key, value) in settings.iter() {
        if value.is_empty() {
            continue;
        }
        out.push_str(ENV_PREFIX);
        out.push_str(&env_key(key));
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out.push_str(ENV_PREFIX);
    out.push_str(CACHE_DIR_KEY);
    out.push('=');
    out.push_str(&cache_dir.to_string_lossy());
    out.push('\n');
    out
}
