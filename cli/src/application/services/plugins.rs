//! Application service — agent plugin installation.

use anyhow::{Context, Result};

use crate::application::ports::{PackageManager, ProgressReporter};
use crate::domain::{Elevation, StepOutcome};

/// Install every plugin in one package-manager call, without a presence
/// check. The package manager treats already-installed plugins as a no-op.
///
/// # Errors
///
/// Returns an error if the install fails.
pub async fn install_plugins(
    host: &impl PackageManager,
    elevation: &Elevation,
    plugins: &[String],
    reporter: &impl ProgressReporter,
) -> Result<StepOutcome> {
    if plugins.is_empty() {
        reporter.skip("no plugins configured");
        return Ok(StepOutcome::Skipped);
    }

    let names: Vec<&str> = plugins.iter().map(String::as_str).collect();
    reporter.step(&format!("installing plugins: {}...", names.join(", ")));
    host.install(elevation, &names)
        .await
        .with_context(|| format!("installing plugins {}", names.join(", ")))?;
    reporter.success(&format!("{} plugins installed", names.len()));
    Ok(StepOutcome::Applied)
}
