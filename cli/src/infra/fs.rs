//! Filesystem infrastructure — implements `SystemFiles`.
//!
//! Writes and deletions outside the temp directory may need root, so they
//! run as `install`/`rm` under the caller's elevation. Reads use `std::fs`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, SystemFiles};
use crate::domain::Elevation;
use crate::infra::host::DebianHost;

fn utf8(path: &Path) -> Result<&str> {
    path.to_str()
        .with_context(|| format!("non UTF-8 path {}", path.display()))
}

impl<R: CommandRunner> SystemFiles for DebianHost<R> {
    async fn place_file(&self, elevation: &Elevation, source: &Path, target: &Path) -> Result<()> {
        self.run_privileged(
            elevation,
            "install",
            &["-D", "-m", "0644", utf8(source)?, utf8(target)?],
        )
        .await?;
        Ok(())
    }

    async fn remove_file(&self, elevation: &Elevation, path: &Path) -> Result<()> {
        self.run_privileged(elevation, "rm", &["-f", "--", utf8(path)?])
            .await?;
        Ok(())
    }

    async fn remove_dir_all(&self, elevation: &Elevation, path: &Path) -> Result<()> {
        self.run_privileged(elevation, "rm", &["-rf", "--", utf8(path)?])
            .await?;
        Ok(())
    }

    fn file_size(&self, path: &Path) -> Result<Option<u64>> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => Ok(Some(meta.len())),
            Ok(_) => anyhow::bail!("{} is not a regular file", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading metadata of {}", path.display())),
        }
    }
}
