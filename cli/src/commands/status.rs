//! `status` — report host state without changing anything.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::status::collect_status;
use crate::output::{HumanRenderer, json};

/// Collect and print the host status.
///
/// # Errors
///
/// Returns an error if a package, service or file query fails.
pub async fn run(app: &AppContext) -> Result<()> {
    let status = collect_status(&app.host, &app.config).await?;
    if app.is_json() {
        json::print(&status)
    } else {
        HumanRenderer::new(&app.output).render_status(&status);
        Ok(())
    }
}
