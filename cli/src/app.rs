//! Application context — unified state passed to every command handler.
//!
//! Built once in `Cli::run()` from the top-level flags and the loaded
//! configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::ProvisionConfig;
use crate::infra::{DebianHost, TokioCommandRunner, YamlConfigStore};
use crate::output::OutputContext;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Configuration file from `--config` or `ZBX_PROVISION_CONFIG`.
    pub config: Option<PathBuf>,
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode). Quiet in JSON mode.
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Effective configuration.
    pub config: ProvisionConfig,
    /// File the configuration came from, `None` for built-in defaults.
    pub config_path: Option<PathBuf>,
    /// The host being provisioned.
    pub host: DebianHost<TokioCommandRunner>,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read, parsed or
    /// validated.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let store = YamlConfigStore::new(flags.config.clone());
        let config_path = store.path()?;
        let config = store.load().context("loading configuration")?;

        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        let output = OutputContext::new(flags.no_color, flags.quiet || flags.json);
        let host = DebianHost::with_timeouts(
            config.timeouts.command(),
            config.timeouts.download(),
            output.show_progress(),
        );

        Ok(Self {
            output,
            mode,
            config,
            config_path,
            host,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }
}
