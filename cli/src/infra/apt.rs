//! `PackageManager` on top of dpkg and apt-get.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, PackageManager};
use crate::domain::{Elevation, PackageState, parse_dpkg_list};
use crate::infra::host::DebianHost;

/// apt-get never prompts; conffile questions keep their defaults.
const APT_ENV: &str = "DEBIAN_FRONTEND=noninteractive";

impl<R: CommandRunner> DebianHost<R> {
    async fn apt_get(&self, elevation: &Elevation, args: &[&str]) -> Result<()> {
        let mut argv = vec![APT_ENV, "apt-get"];
        argv.extend_from_slice(args);
        self.run_privileged_as(elevation, "apt-get", "env", &argv)
            .await?;
        Ok(())
    }
}

impl<R: CommandRunner> PackageManager for DebianHost<R> {
    async fn state(&self, package: &str) -> Result<PackageState> {
        let output = self.run_checked("dpkg", &["-l"]).await?;
        let listing = String::from_utf8_lossy(&output.stdout);
        Ok(parse_dpkg_list(&listing, package))
    }

    async fn is_registered(&self, package: &str) -> Result<bool> {
        let output = self.runner.run("dpkg", &["-s", package]).await?;
        Ok(output.status.success())
    }

    async fn install_file(&self, elevation: &Elevation, path: &Path) -> Result<()> {
        let path = path
            .to_str()
            .with_context(|| format!("non UTF-8 path {}", path.display()))?;
        self.run_privileged(elevation, "dpkg", &["-i", path]).await?;
        Ok(())
    }

    async fn refresh_index(&self, elevation: &Elevation) -> Result<()> {
        self.apt_get(elevation, &["update"]).await
    }

    async fn install(&self, elevation: &Elevation, packages: &[&str]) -> Result<()> {
        let mut args = vec!["install", "-y"];
        args.extend_from_slice(packages);
        self.apt_get(elevation, &args).await
    }

    async fn purge(&self, elevation: &Elevation, package: &str) -> Result<()> {
        self.apt_get(elevation, &["purge", "-y", package]).await
    }
}
