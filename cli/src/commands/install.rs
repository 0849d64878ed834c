//! `install` — run the provisioning workflow.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::provision::provision;
use crate::output::{HumanRenderer, TerminalReporter, json};

/// Provision the agent and print the run report.
///
/// # Errors
///
/// Returns the `StepFailure` of the first step that failed.
pub async fn run(app: &AppContext) -> Result<()> {
    app.output
        .header(&format!("Provisioning {}", app.config.agent.package));
    let reporter = TerminalReporter::new(&app.output);
    let report = provision(&app.host, &app.config, &reporter).await?;

    if app.is_json() {
        json::print(&report)
    } else {
        HumanRenderer::new(&app.output).render_report(&report);
        Ok(())
    }
}
