//! Configuration rendering: env-file write and cache invalidation.

use std::io::Write;

use tracing::debug;

use crate::domain::error::ConfigError;
use crate::domain::settings::{
    render_env, ConfigSet, RECOGNIZED_SETTINGS, REQUIRED_SETTINGS,
};
use crate::infra::paths::AgentPaths;

/// Outcome of a cache invalidation. Cache absence is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheClearResult {
    Cleared,
    NotPresent,
}

/// Validate, filter, render, and persist the agent's env config.
///
/// Fails fast before any filesystem write when a required setting is empty
/// or absent: configuration is all-or-nothing, never partially applied.
/// Recognized settings are rendered in allow-list order; unrecognized keys
/// are ignored. After a successful write the cache directory is cleared so
/// stale cached data cannot reference superseded settings.
///
/// # Errors
///
/// Returns `ConfigError::Incomplete` when a required setting is missing, or
/// `ConfigError::Render` on filesystem failure.
pub fn configure(
    paths: &AgentPaths,
    settings: &ConfigSet,
    header: Option<&str>,
) -> Result<(), ConfigError> {
    let missing: Vec<&'static str> = REQUIRED_SETTINGS
        .iter()
        .filter(|key| settings.get(key).is_none_or(str::is_empty))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::Incomplete { missing });
    }

    let mut recognized = ConfigSet::new();
    for key in RECOGNIZED_SETTINGS {
        if let Some(value) = settings.get(key) {
            if !value.is_empty() {
                recognized.set(key, value);
            }
        }
    }
    for (key, _) in settings.iter() {
        if !RECOGNIZED_SETTINGS.contains(&key) {
            debug!(key, "ignoring unrecognized setting");
        }
    }

    let text = render_env(&recognized, header, &paths.cache_dir());
    write_env_file(paths, &text)?;
    clear_cache(paths);
    Ok(())
}

/// Overwrite the env file with `text` via write-to-temp + rename, so a
/// reader never observes a half-written file.
///
/// # Errors
///
/// Returns `ConfigError::Render` on any filesystem failure.
pub fn write_env_file(paths: &AgentPaths, text: &str) -> Result<(), ConfigError> {
    let path = paths.env_file();
    let render_err = |source: std::io::Error| ConfigError::Render {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(paths.common_dir()).map_err(render_err)?;
    let mut tmp = tempfile::NamedTempFile::new_in(paths.common_dir()).map_err(render_err)?;
    tmp.write_all(text.as_bytes()).map_err(render_err)?;
    tmp.persist(&path).map_err(|e| render_err(e.error))?;
    debug!(path = %path.display(), "env config written");
    Ok(())
}

/// Delete the cache directory if present; the agent recreates its contents
/// lazily on the next run. Removal is best-effort and never fails the
/// caller.
pub fn clear_cache(paths: &AgentPaths) -> CacheClearResult {
    let dir = paths.cache_dir();
    if !dir.exists() {
        debug!(dir = %dir.display(), "cache dir doesn't exist, skipping");
        return CacheClearResult::NotPresent;
    }
    debug!(dir = %dir.display(), "clearing cache dir");
    if let Err(error) = std::fs::remove_dir_all(&dir) {
        tracing::warn!(dir = %dir.display(), %error, "cache removal incomplete");
    }
    CacheClearResult::Cleared
}

/// The exact current text of the rendered env file — the read-action
/// surface.
///
/// # Errors
///
/// Returns `ConfigError::Read` if the file cannot be read.
pub fn env_config_text(paths: &AgentPaths) -> Result<String, ConfigError> {
    let path = paths.env_file();
    std::fs::read_to_string(&path).map_err(|source| ConfigError::Read { path, source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn temp_paths(dir: &tempfile::TempDir) -> AgentPaths {
        AgentPaths::new(
            dir.path().join("common"),
            dir.path().join("jobbergate-agent.service"),
        )
    }

    fn complete_settings() -> ConfigSet {
        [
            ("base-api-url", "https://x"),
            ("oidc-client-id", "abc"),
            ("oidc-client-secret", "xyz"),
            ("sentry-dsn", ""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn configure_writes_recognized_nonempty_settings() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = temp_paths(&dir);
        configure(&paths, &complete_settings(), None).expect("configure");

        let text = env_config_text(&paths).expect("read back");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "JOBBERGATE_AGENT_BASE_API_URL=https://x".to_string(),
                "JOBBERGATE_AGENT_OIDC_CLIENT_ID=abc".to_string(),
                "JOBBERGATE_AGENT_OIDC_CLIENT_SECRET=xyz".to_string(),
                format!(
                    "JOBBERGATE_AGENT_CACHE_DIR={}",
                    paths.cache_dir().display()
                ),
            ]
        );
    }

    #[test]
    fn configure_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = temp_paths(&dir);
        configure(&paths, &complete_settings(), Some("# header")).expect("first");
        let first = env_config_text(&paths).expect("read");
        configure(&paths, &complete_settings(), Some("# header")).expect("second");
        let second = env_config_text(&paths).expect("read");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_required_setting_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = temp_paths(&dir);
        let settings: ConfigSet = [("oidc-client-id", "abc"), ("oidc-client-secret", "")]
            .into_iter()
            .collect();

        let err = configure(&paths, &settings, None).expect_err("expected Err");
        assert!(matches!(
            err,
            ConfigError::Incomplete { ref missing } if missing == &vec!["oidc-client-secret"]
        ));
        assert!(!paths.env_file().exists());
    }

    #[test]
    fn unrecognized_settings_are_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = temp_paths(&dir);
        let mut settings = complete_settings();
        settings.set("not-a-real-setting", "value");
        configure(&paths, &settings, None).expect("configure");
        let text = env_config_text(&paths).expect("read");
        assert!(!text.contains("NOT_A_REAL_SETTING"));
    }

    #[test]
    fn configure_clears_existing_cache() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = temp_paths(&dir);
        std::fs::create_dir_all(paths.cache_dir()).expect("mkdir");
        std::fs::write(paths.cache_dir().join("stale"), "data").expect("write");

        configure(&paths, &complete_settings(), None).expect("configure");
        assert!(!paths.cache_dir().exists());
    }

    #[test]
    fn clear_cache_reports_not_present() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = temp_paths(&dir);
        assert_eq!(clear_cache(&paths), CacheClearResult::NotPresent);
    }

    #[test]
    fn clear_cache_removes_populated_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = temp_paths(&dir);
        std::fs::create_dir_all(paths.cache_dir().join("nested")).expect("mkdir");
        std::fs::write(paths.cache_dir().join("nested").join("f"), "x").expect("write");

        assert_eq!(clear_cache(&paths), CacheClearResult::Cleared);
        assert!(!paths.cache_dir().exists());
    }

    #[test]
    fn env_config_text_errors_when_never_rendered() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = temp_paths(&dir);
        let err = env_config_text(&paths).expect_err("expected Err");
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
