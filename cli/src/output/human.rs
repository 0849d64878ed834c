//! Human-readable terminal renderer.

use crate::domain::{Elevation, HostStatus, NamedState, PackageState, ProvisionReport, StepOutcome};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the summary printed after a successful run.
    pub fn render_report(&self, report: &ProvisionReport) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.header("Summary:");
        for (step, outcome) in report.outcomes() {
            self.ctx.kv(&format!("{}:", step.label()), outcome_display(outcome));
        }
        self.ctx.kv(
            "configuration:",
            &format!("{} ({} bytes)", report.config.variant, report.config.bytes),
        );
        let elapsed = report.finished_at - report.started_at;
        self.ctx
            .kv("elapsed:", &format!("{}s", elapsed.num_seconds()));
        println!();
        self.ctx
            .success(&format!("{} provisioned and running", report.service));
    }

    /// Render the read-only host status.
    pub fn render_status(&self, status: &HostStatus) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.header("Host:");
        self.ctx.kv("privilege:", &privilege_display(status.privilege.as_ref()));
        self.ctx.kv(
            "gpu probe:",
            &format!(
                "{} ({} configuration)",
                if status.probe_present { "found" } else { "not found" },
                status.variant
            ),
        );
        println!();
        self.ctx.header("Packages:");
        self.package(&status.legacy, "legacy");
        self.ctx.kv(
            "repository:",
            if status.repository_registered {
                "registered"
            } else {
                "not registered"
            },
        );
        self.package(&status.agent, "agent");
        for plugin in &status.plugins {
            self.package(plugin, "plugin");
        }
        println!();
        self.ctx.header("Service:");
        self.ctx.kv(
            "config file:",
            &status
                .config_bytes
                .map_or_else(|| "missing".to_owned(), |b| format!("{b} bytes")),
        );
        self.ctx
            .kv("enabled:", if status.service_enabled { "yes" } else { "no" });
        self.ctx
            .kv("active:", if status.service_active { "yes" } else { "no" });
    }

    fn package(&self, named: &NamedState, role: &str) {
        self.ctx.kv(
            &format!("{role}:"),
            &format!("{} ({})", named.name, package_state_display(&named.state)),
        );
    }
}

fn outcome_display(outcome: StepOutcome) -> &'static str {
    match outcome {
        StepOutcome::Applied => "applied",
        StepOutcome::Skipped => "skipped",
    }
}

fn privilege_display(privilege: Option<&Elevation>) -> String {
    match privilege {
        Some(Elevation::Direct) => "root".to_owned(),
        Some(Elevation::Helper(helper)) => format!("via {helper}"),
        None => "unavailable".to_owned(),
    }
}

fn package_state_display(state: &PackageState) -> String {
    match state {
        PackageState::NotInstalled => "not installed".to_owned(),
        PackageState::Installed => "installed".to_owned(),
        PackageState::ConfigFiles => "config files only".to_owned(),
        PackageState::Other(flags) => format!("dpkg state {flags}"),
    }
}
