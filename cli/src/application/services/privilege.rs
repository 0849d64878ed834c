//! Application service — privilege resolution.

use tracing::info;

use crate::application::ports::{PrivilegeProbe, ProgressReporter, ToolProbe};
use crate::domain::{Elevation, PrivilegeError};

/// Decide whether privileged commands run directly or through `helper`.
///
/// The helper is only looked up when the process is not already root.
///
/// # Errors
///
/// Returns `PrivilegeError::Unavailable` when neither root nor the helper is
/// available. Nothing on the host has been changed at that point.
pub fn resolve_privilege(
    host: &(impl PrivilegeProbe + ToolProbe),
    helper: &str,
    reporter: &impl ProgressReporter,
) -> Result<Elevation, PrivilegeError> {
    let superuser = host.is_superuser();
    let helper_available = !superuser && host.is_available(helper);
    info!(superuser, helper, helper_available, "resolving privilege mode");

    let elevation = Elevation::resolve(superuser, helper, helper_available)?;
    reporter.step(&elevation.describe());
    Ok(elevation)
}
