//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;
use crate::domain::StepFailure;

/// Provision the Zabbix agent 2 on this host
#[derive(Parser)]
#[command(name = "zbx-provision", version, propagate_version = true)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, env = "ZBX_PROVISION_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (`NO_COLOR` is honoured as well)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the provisioning workflow (default)
    Install,

    /// Report current host state without changing anything
    Status,

    /// Print the effective configuration
    ShowConfig,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            config,
            json,
            quiet,
            no_color,
            command,
            ..
        } = self;
        let app = AppContext::new(&AppFlags {
            config,
            no_color,
            quiet,
            json,
        })?;
        match command.unwrap_or(Command::Install) {
            Command::Install => commands::install::run(&app).await,
            Command::Status => commands::status::run(&app).await,
            Command::ShowConfig => commands::show_config::run(&app),
        }
    }
}

/// Stable code for the JSON error object: the failed step, or `error`.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<StepFailure>()
        .map_or("error", |failure| failure.step.code())
}
