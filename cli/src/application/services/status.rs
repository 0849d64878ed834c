//! Application service — read-only host status.

use anyhow::{Context, Result};

use crate::application::ports::HostSystem;
use crate::domain::{ConfigVariant, Elevation, HostStatus, NamedState, ProvisionConfig};

/// Collect the state every workflow step would look at, without changing
/// anything and without elevating.
///
/// # Errors
///
/// Returns an error if a package, service or file query fails.
pub async fn collect_status(host: &impl HostSystem, config: &ProvisionConfig) -> Result<HostStatus> {
    let helper = &config.privilege.helper;
    let superuser = host.is_superuser();
    let privilege =
        Elevation::resolve(superuser, helper, !superuser && host.is_available(helper)).ok();

    let legacy = named_state(host, &config.legacy.package).await?;
    let repository_registered = host
        .is_registered(&config.repository.package)
        .await
        .with_context(|| format!("querying registration of {}", config.repository.package))?;
    let agent = named_state(host, &config.agent.package).await?;

    let mut plugins = Vec::with_capacity(config.agent.plugins.len());
    for plugin in &config.agent.plugins {
        plugins.push(named_state(host, plugin).await?);
    }

    let remote = &config.remote_config;
    let probe_present = host.is_available(&remote.probe_command);
    let variant = ConfigVariant::select(probe_present);
    let config_bytes = host.file_size(&remote.target)?;

    let unit = &config.agent.service;
    let service_enabled = host
        .is_enabled(unit)
        .await
        .with_context(|| format!("querying {unit}"))?;
    let service_active = host
        .is_active(unit)
        .await
        .with_context(|| format!("querying {unit}"))?;

    Ok(HostStatus {
        privilege,
        legacy,
        repository_registered,
        agent,
        plugins,
        probe_present,
        variant,
        config_bytes,
        service_enabled,
        service_active,
    })
}

async fn named_state(host: &impl HostSystem, package: &str) -> Result<NamedState> {
    let state = host
        .state(package)
        .await
        .with_context(|| format!("querying state of {package}"))?;
    Ok(NamedState {
        name: package.to_owned(),
        state,
    })
}
