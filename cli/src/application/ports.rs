//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.
//!
//! Every mutating operation takes the resolved `Elevation` explicitly.
//! Queries never need it.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::{Elevation, PackageState, ProvisionConfig};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
}

// ── Host Probe Ports ──────────────────────────────────────────────────────────

/// Answers whether the current process already has superuser rights.
pub trait PrivilegeProbe {
    fn is_superuser(&self) -> bool;
}

/// Answers whether a command is resolvable on PATH.
pub trait ToolProbe {
    fn is_available(&self, command: &str) -> bool;
}

// ── Package Manager Port ──────────────────────────────────────────────────────

/// Live package database queries and mutations. Nothing is cached.
#[allow(async_fn_in_trait)]
pub trait PackageManager {
    /// State of `package` in the installed-package list.
    async fn state(&self, package: &str) -> Result<PackageState>;
    /// Whether dpkg knows `package` at all (`dpkg -s` succeeds).
    async fn is_registered(&self, package: &str) -> Result<bool>;
    /// Install a local `.deb` file.
    async fn install_file(&self, elevation: &Elevation, path: &Path) -> Result<()>;
    /// Refresh package indexes.
    async fn refresh_index(&self, elevation: &Elevation) -> Result<()>;
    /// Install packages from the configured repositories.
    async fn install(&self, elevation: &Elevation, packages: &[&str]) -> Result<()>;
    /// Remove a package together with its configuration files.
    async fn purge(&self, elevation: &Elevation, package: &str) -> Result<()>;
}

// ── Service Manager Port ──────────────────────────────────────────────────────

#[allow(async_fn_in_trait)]
pub trait ServiceManager {
    async fn stop(&self, elevation: &Elevation, unit: &str) -> Result<()>;
    async fn disable(&self, elevation: &Elevation, unit: &str) -> Result<()>;
    async fn enable(&self, elevation: &Elevation, unit: &str) -> Result<()>;
    async fn restart(&self, elevation: &Elevation, unit: &str) -> Result<()>;
    async fn is_enabled(&self, unit: &str) -> Result<bool>;
    async fn is_active(&self, unit: &str) -> Result<bool>;
}

// ── Download Port ─────────────────────────────────────────────────────────────

/// A file fetched into a temporary location.
///
/// `guard` owns the temporary location; dropping it deletes the file.
pub struct Download {
    pub path: PathBuf,
    pub bytes: u64,
    pub guard: Box<dyn std::any::Any>,
}

#[allow(async_fn_in_trait)]
pub trait Downloader {
    /// Fetch `url` into a fresh temporary file named `file_name`.
    async fn fetch(&self, url: &str, file_name: &str) -> Result<Download>;
}

// ── System Files Port ─────────────────────────────────────────────────────────

/// Privileged filesystem changes outside the process's own temp space.
#[allow(async_fn_in_trait)]
pub trait SystemFiles {
    /// Copy `source` to `target` (mode 0644), creating parent directories
    /// and overwriting any existing file.
    async fn place_file(&self, elevation: &Elevation, source: &Path, target: &Path) -> Result<()>;
    /// Remove a file. A missing file is not an error.
    async fn remove_file(&self, elevation: &Elevation, path: &Path) -> Result<()>;
    /// Remove a directory tree. A missing directory is not an error.
    async fn remove_dir_all(&self, elevation: &Elevation, path: &Path) -> Result<()>;
    /// Size of a file in bytes, `None` if it does not exist.
    fn file_size(&self, path: &Path) -> Result<Option<u64>>;
}

// ── Composite Host Port ───────────────────────────────────────────────────────

/// Everything the workflow needs from the host.
pub trait HostSystem:
    PrivilegeProbe + ToolProbe + PackageManager + ServiceManager + Downloader + SystemFiles
{
}

/// Blanket implementation: any type implementing all sub-traits is a `HostSystem`.
impl<T> HostSystem for T where
    T: PrivilegeProbe + ToolProbe + PackageManager + ServiceManager + Downloader + SystemFiles
{
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a message for a step whose target state was already met.
    fn skip(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading the provisioning configuration.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file applies.
    fn load(&self) -> Result<ProvisionConfig>;
    /// The file that `load` reads, `None` when built-in defaults are used.
    fn path(&self) -> Result<Option<PathBuf>>;
}
