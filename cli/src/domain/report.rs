//! Workflow steps and the report of a provisioning run.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::package::PackageState;
use crate::domain::privilege::Elevation;
use crate::domain::variant::ConfigVariant;

/// The workflow components, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Privilege,
    LegacyRemoval,
    Repository,
    AgentInstall,
    Plugins,
    ConfigFetch,
    ServiceActivation,
}

impl Step {
    /// All steps in the order the orchestrator runs them.
    pub const ALL: [Step; 7] = [
        Step::Privilege,
        Step::LegacyRemoval,
        Step::Repository,
        Step::AgentInstall,
        Step::Plugins,
        Step::ConfigFetch,
        Step::ServiceActivation,
    ];

    /// Human-readable label used in progress and error messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Step::Privilege => "privilege resolution",
            Step::LegacyRemoval => "legacy agent removal",
            Step::Repository => "repository setup",
            Step::AgentInstall => "agent installation",
            Step::Plugins => "plugin installation",
            Step::ConfigFetch => "configuration fetch",
            Step::ServiceActivation => "service activation",
        }
    }

    /// Stable machine-readable code, used as the JSON error `code`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Step::Privilege => "privilege",
            Step::LegacyRemoval => "legacy_removal",
            Step::Repository => "repository",
            Step::AgentInstall => "agent_install",
            Step::Plugins => "plugins",
            Step::ConfigFetch => "config_fetch",
            Step::ServiceActivation => "service_activation",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a step changed the host or found its target state already met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Applied,
    Skipped,
}

/// What the config fetcher wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchedConfig {
    pub variant: ConfigVariant,
    pub url: String,
    pub bytes: u64,
}

/// Summary of a completed provisioning run.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub privilege: Elevation,
    pub legacy_removal: StepOutcome,
    pub repository: StepOutcome,
    pub agent_install: StepOutcome,
    pub plugins: StepOutcome,
    pub config: FetchedConfig,
    pub service: String,
}

impl ProvisionReport {
    /// Outcome per step, in execution order. Privilege, config fetch and
    /// service activation always apply on a successful run.
    #[must_use]
    pub fn outcomes(&self) -> Vec<(Step, StepOutcome)> {
        let applied = StepOutcome::Applied;
        let per_step = [
            applied,
            self.legacy_removal,
            self.repository,
            self.agent_install,
            self.plugins,
            applied,
            applied,
        ];
        Step::ALL.into_iter().zip(per_step).collect()
    }
}

/// Read-only snapshot of the host, as reported by `status`.
#[derive(Debug, Clone, Serialize)]
pub struct HostStatus {
    /// `None` when neither root nor the elevation helper is available.
    pub privilege: Option<Elevation>,
    pub legacy: NamedState,
    pub repository_registered: bool,
    pub agent: NamedState,
    pub plugins: Vec<NamedState>,
    pub probe_present: bool,
    pub variant: ConfigVariant,
    /// Size of the agent config file, `None` if it does not exist.
    pub config_bytes: Option<u64>,
    pub service_enabled: bool,
    pub service_active: bool,
}

/// A package name with its current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedState {
    pub name: String,
    pub state: PackageState,
}
