//! Application service — the provisioning workflow.
//!
//! Runs the six components in fixed order. Each component decides its own
//! no-op condition; the orchestrator never skips one. The first failure
//! aborts the run and is reported with the step it came from.

use chrono::Utc;

use crate::application::ports::{HostSystem, ProgressReporter};
use crate::application::services::{
    config_fetch::fetch_agent_config,
    legacy::remove_legacy_agent,
    packages::{ensure_agent, ensure_repository},
    plugins::install_plugins,
    privilege::resolve_privilege,
    service::activate_service,
};
use crate::domain::{ProvisionConfig, ProvisionReport, Step, StepFailure};

fn failed(step: Step) -> impl FnOnce(anyhow::Error) -> StepFailure {
    move |source| StepFailure::new(step, source)
}

/// Provision the agent on `host`.
///
/// # Errors
///
/// Returns a `StepFailure` naming the first step that failed. Steps after it
/// never run, so a failed config fetch never restarts the service.
pub async fn provision(
    host: &impl HostSystem,
    config: &ProvisionConfig,
    reporter: &impl ProgressReporter,
) -> Result<ProvisionReport, StepFailure> {
    let started_at = Utc::now();

    let elevation = resolve_privilege(host, &config.privilege.helper, reporter)
        .map_err(|e| StepFailure::new(Step::Privilege, e.into()))?;

    let legacy_removal = remove_legacy_agent(host, &elevation, &config.legacy, reporter)
        .await
        .map_err(failed(Step::LegacyRemoval))?;

    let repository = ensure_repository(host, &elevation, &config.repository, reporter)
        .await
        .map_err(failed(Step::Repository))?;

    let agent_install = ensure_agent(host, &elevation, &config.agent.package, reporter)
        .await
        .map_err(failed(Step::AgentInstall))?;

    let plugins = install_plugins(host, &elevation, &config.agent.plugins, reporter)
        .await
        .map_err(failed(Step::Plugins))?;

    let fetched = fetch_agent_config(host, &elevation, &config.remote_config, reporter)
        .await
        .map_err(failed(Step::ConfigFetch))?;

    activate_service(host, &elevation, &config.agent.service, reporter)
        .await
        .map_err(failed(Step::ServiceActivation))?;

    Ok(ProvisionReport {
        started_at,
        finished_at: Utc::now(),
        privilege: elevation,
        legacy_removal,
        repository,
        agent_install,
        plugins,
        config: fetched,
        service: config.agent.service.clone(),
    })
}
