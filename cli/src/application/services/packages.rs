//! Application service — vendor repository and agent package installation.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::{Downloader, PackageManager, ProgressReporter};
use crate::domain::config::RepositoryConfig;
use crate::domain::{Elevation, StepOutcome};

/// Register the vendor repository unless its release package already is.
///
/// Downloads the release `.deb` to a temporary location, installs it, then
/// refreshes package indexes.
///
/// # Errors
///
/// Returns an error if the query, download, install or index refresh fails.
pub async fn ensure_repository(
    host: &(impl PackageManager + Downloader),
    elevation: &Elevation,
    repo: &RepositoryConfig,
    reporter: &impl ProgressReporter,
) -> Result<StepOutcome> {
    let registered = host
        .is_registered(&repo.package)
        .await
        .with_context(|| format!("querying registration of {}", repo.package))?;
    if registered {
        reporter.skip(&format!("repository package {} already registered", repo.package));
        return Ok(StepOutcome::Skipped);
    }

    let url = repo.artifact_url();
    info!(%url, version = %repo.version, "fetching repository release package");
    reporter.step(&format!("adding repository {} {}...", repo.package, repo.version));

    let download = host
        .fetch(&url, &repo.artifact_file_name())
        .await
        .with_context(|| format!("downloading {url}"))?;
    host.install_file(elevation, &download.path)
        .await
        .with_context(|| format!("installing {}", download.path.display()))?;
    drop(download);

    reporter.step("refreshing package indexes...");
    host.refresh_index(elevation)
        .await
        .context("refreshing package indexes")?;

    reporter.success(&format!("repository {} {} added", repo.package, repo.version));
    Ok(StepOutcome::Applied)
}

/// Install the agent package unless it is already installed.
///
/// # Errors
///
/// Returns an error if the query or the install fails.
pub async fn ensure_agent(
    host: &impl PackageManager,
    elevation: &Elevation,
    package: &str,
    reporter: &impl ProgressReporter,
) -> Result<StepOutcome> {
    let state = host
        .state(package)
        .await
        .with_context(|| format!("querying state of {package}"))?;
    info!(package, ?state, "agent package state");

    if state.is_installed() {
        reporter.skip(&format!("{package} already installed"));
        return Ok(StepOutcome::Skipped);
    }

    reporter.step(&format!("installing {package}..."));
    host.install(elevation, &[package])
        .await
        .with_context(|| format!("installing {package}"))?;
    reporter.success(&format!("{package} installed"));
    Ok(StepOutcome::Applied)
}
