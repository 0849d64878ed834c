//! `ServiceManager` on top of systemctl.

use anyhow::Result;

use crate::application::ports::{CommandRunner, ServiceManager};
use crate::domain::Elevation;
use crate::infra::host::DebianHost;

impl<R: CommandRunner> ServiceManager for DebianHost<R> {
    async fn stop(&self, elevation: &Elevation, unit: &str) -> Result<()> {
        self.run_privileged(elevation, "systemctl", &["stop", unit]).await?;
        Ok(())
    }

    async fn disable(&self, elevation: &Elevation, unit: &str) -> Result<()> {
        self.run_privileged(elevation, "systemctl", &["disable", unit]).await?;
        Ok(())
    }

    async fn enable(&self, elevation: &Elevation, unit: &str) -> Result<()> {
        self.run_privileged(elevation, "systemctl", &["enable", unit]).await?;
        Ok(())
    }

    async fn restart(&self, elevation: &Elevation, unit: &str) -> Result<()> {
        self.run_privileged(elevation, "systemctl", &["restart", unit]).await?;
        Ok(())
    }

    async fn is_enabled(&self, unit: &str) -> Result<bool> {
        let output = self.runner.run("systemctl", &["is-enabled", "--quiet", unit]).await?;
        Ok(output.status.success())
    }

    async fn is_active(&self, unit: &str) -> Result<bool> {
        let output = self.runner.run("systemctl", &["is-active", "--quiet", unit]).await?;
        Ok(output.status.success())
    }
}
