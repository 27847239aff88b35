//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::application::services::systemctl::ServiceOp;
use crate::commands;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::paths::AgentPaths;

/// Lifecycle manager for the jobbergate-agent snap
#[derive(Parser)]
#[command(
    name = "jobbergate-ops",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override the snap common directory (testing/sandboxing)
    #[arg(long, global = true, value_name = "DIR")]
    pub common_dir: Option<PathBuf>,

    /// Override the systemd unit file path (testing/sandboxing)
    #[arg(long, global = true, value_name = "FILE")]
    pub unit_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install the agent snap
    Install(commands::install::InstallArgs),

    /// Render the agent's env configuration from settings
    Configure(commands::configure::ConfigureArgs),

    /// Stop, disable, and delete everything this tool created
    Remove,

    /// Show installed version and daemon state
    Status {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the rendered env configuration
    EnvConfig,

    /// Start the agent service
    Start,

    /// Stop the agent service
    Stop,

    /// Restart the agent service
    Restart,

    /// Delete the agent's cache directory
    ClearCache,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let paths = self.paths();
        let runner = TokioCommandRunner;
        match self.command {
            Command::Install(args) => commands::install::run(&runner, &args).await,
            Command::Configure(args) => commands::configure::run(&paths, &args),
            Command::Remove => commands::remove::run(&runner, &paths).await,
            Command::Status { json } => commands::status::run(&runner, json).await,
            Command::EnvConfig => commands::env_config::run(&paths),
            Command::Start => commands::service::run(&runner, ServiceOp::Start).await,
            Command::Stop => commands::service::run(&runner, ServiceOp::Stop).await,
            Command::Restart => commands::service::run(&runner, ServiceOp::Restart).await,
            Command::ClearCache => {
                commands::service::clear_cache(&paths);
                Ok(())
            }
        }
    }

    fn paths(&self) -> AgentPaths {
        let defaults = AgentPaths::system();
        AgentPaths::new(
            self.common_dir
                .clone()
                .unwrap_or_else(|| defaults.common_dir().to_path_buf()),
            self.unit_file
                .clone()
                .unwrap_or_else(|| defaults.unit_file().to_path_buf()),
        )
    }
}
