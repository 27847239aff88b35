//! `jobbergate-ops configure` — collect settings and render the env config.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::application::services::configure;
use crate::domain::settings::ConfigSet;
use crate::infra::paths::AgentPaths;

#[derive(Args)]
pub struct ConfigureArgs {
    /// A setting as KEY=VALUE; may be repeated, overrides --file entries
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Flat YAML mapping file of settings
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Header comment written at the top of the rendered file
    #[arg(long)]
    pub header: Option<String>,
}

/// Run `jobbergate-ops configure`.
///
/// # Errors
///
/// Returns an error if the inputs cannot be parsed, a required setting is
/// missing, or the env file cannot be written.
pub fn run(paths: &AgentPaths, args: &ConfigureArgs) -> Result<()> {
    let settings = collect_settings(args)?;
    configure::configure(paths, &settings, args.header.as_deref())?;
    println!("Configuration written to {}", paths.env_file().display());
    Ok(())
}

/// Merge file-sourced settings with `--set` overrides.
fn collect_settings(args: &ConfigureArgs) -> Result<ConfigSet> {
    let mut settings = ConfigSet::new();

    if let Some(file) = &args.file {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("cannot read {}", file.display()))?;
        let doc: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(&text)
            .with_context(|| format!("cannot parse {}", file.display()))?;
        for (key, value) in doc {
            let value = scalar_to_string(&value)
                .with_context(|| format!("setting `{key}` in {}", file.display()))?;
            settings.set(key, value);
        }
    }

    for pair in &args.set {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("invalid --set `{pair}`: expected KEY=VALUE"))?;
        settings.set(key, value);
    }
    Ok(settings)
}

/// Settings are flat strings; YAML scalars are stringified, null means unset.
fn scalar_to_string(value: &serde_yaml::Value) -> Result<String> {
    match value {
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::String(s) => Ok(s.clone()),
        _ => anyhow::bail!("value must be a flat scalar"),
    }
}
