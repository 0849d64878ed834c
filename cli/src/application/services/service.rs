//! Application service — agent service activation.

use anyhow::{Context, Result};

use crate::application::ports::{ProgressReporter, ServiceManager};
use crate::domain::Elevation;

/// Enable the unit for start-on-boot, then restart it so the freshly written
/// configuration takes effect.
///
/// # Errors
///
/// Returns an error if either call fails.
pub async fn activate_service(
    host: &impl ServiceManager,
    elevation: &Elevation,
    unit: &str,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    reporter.step(&format!("enabling and restarting {unit}..."));
    host.enable(elevation, unit)
        .await
        .with_context(|| format!("enabling {unit}"))?;
    host.restart(elevation, unit)
        .await
        .with_context(|| format!("restarting {unit}"))?;
    reporter.success(&format!("{unit} enabled and running"));
    Ok(())
}
