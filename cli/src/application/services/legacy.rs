//! Application service — legacy agent removal.
//!
//! Stopping and disabling the legacy unit and deleting leftover files are
//! best-effort. Only the purge itself is fatal.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::application::ports::{PackageManager, ProgressReporter, ServiceManager, SystemFiles};
use crate::domain::config::LegacyConfig;
use crate::domain::{Elevation, StepOutcome};

/// Purge the legacy agent package if dpkg still tracks it.
///
/// A host without the legacy package sees no mutating call at all.
///
/// # Errors
///
/// Returns an error if the package query or the purge fails.
pub async fn remove_legacy_agent(
    host: &(impl PackageManager + ServiceManager + SystemFiles),
    elevation: &Elevation,
    legacy: &LegacyConfig,
    reporter: &impl ProgressReporter,
) -> Result<StepOutcome> {
    let state = host
        .state(&legacy.package)
        .await
        .with_context(|| format!("querying state of {}", legacy.package))?;
    info!(package = %legacy.package, ?state, "legacy package state");

    if !state.has_footprint() {
        reporter.skip(&format!("legacy package {} not installed", legacy.package));
        return Ok(StepOutcome::Skipped);
    }

    reporter.step(&format!("removing legacy package {}...", legacy.package));

    // The unit may not exist or may already be stopped.
    if let Err(e) = host.stop(elevation, &legacy.service).await {
        info!(unit = %legacy.service, error = %format!("{e:#}"), "ignoring stop failure");
        reporter.skip(&format!("could not stop {}, continuing", legacy.service));
    }
    if let Err(e) = host.disable(elevation, &legacy.service).await {
        info!(unit = %legacy.service, error = %format!("{e:#}"), "ignoring disable failure");
        reporter.skip(&format!("could not disable {}, continuing", legacy.service));
    }

    host.purge(elevation, &legacy.package)
        .await
        .with_context(|| format!("purging {}", legacy.package))?;

    for path in &legacy.leftover_files {
        if let Err(e) = host.remove_file(elevation, path).await {
            warn!(path = %path.display(), error = %format!("{e:#}"), "leftover file not removed");
            reporter.warn(&format!("could not remove {}", path.display()));
        }
    }
    for path in &legacy.leftover_dirs {
        if let Err(e) = host.remove_dir_all(elevation, path).await {
            warn!(path = %path.display(), error = %format!("{e:#}"), "leftover directory not removed");
            reporter.warn(&format!("could not remove {}", path.display()));
        }
    }

    reporter.success(&format!("legacy package {} purged", legacy.package));
    Ok(StepOutcome::Applied)
}
