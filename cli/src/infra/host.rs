//! `DebianHost` — the production `HostSystem` for Debian-family hosts.
//!
//! All process execution goes through a `CommandRunner` so tests can inject
//! a recording runner. The port implementations live next to their tools:
//! `apt.rs`, `systemd.rs`, `fs.rs` and `download.rs`.

use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{CommandRunner, PrivilegeProbe, ToolProbe};
use crate::domain::Elevation;
use crate::infra::command_runner::{TokioCommandRunner, ensure_success};

/// Infrastructure adapter that routes dpkg, apt-get, systemctl and file
/// commands through a `CommandRunner`.
pub struct DebianHost<R: CommandRunner> {
    pub(crate) runner: R,
    pub(crate) download_timeout: Option<Duration>,
    pub(crate) show_progress: bool,
}

impl<R: CommandRunner> DebianHost<R> {
    /// Create a host adapter with an explicit runner.
    pub fn new(runner: R, download_timeout: Option<Duration>, show_progress: bool) -> Self {
        Self {
            runner,
            download_timeout,
            show_progress,
        }
    }

    /// Run an unprivileged command and require a zero exit.
    pub(crate) async fn run_checked(&self, program: &str, args: &[&str]) -> Result<Output> {
        let output = self.runner.run(program, args).await?;
        ensure_success(program, output)
    }

    /// Run a command under `elevation` and require a zero exit.
    pub(crate) async fn run_privileged(
        &self,
        elevation: &Elevation,
        program: &str,
        args: &[&str],
    ) -> Result<Output> {
        self.run_privileged_as(elevation, program, program, args).await
    }

    /// Like `run_privileged`, but failures name `tool` instead of `program`
    /// (for wrappers such as `env`).
    pub(crate) async fn run_privileged_as(
        &self,
        elevation: &Elevation,
        tool: &str,
        program: &str,
        args: &[&str],
    ) -> Result<Output> {
        let (wrapped, argv) = elevation.wrap(program, args);
        let output = self.runner.run(wrapped, &argv).await?;
        ensure_success(tool, output)
    }
}

impl DebianHost<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn with_timeouts(
        command_timeout: Duration,
        download_timeout: Option<Duration>,
        show_progress: bool,
    ) -> Self {
        Self::new(
            TokioCommandRunner::new(command_timeout),
            download_timeout,
            show_progress,
        )
    }
}

impl<R: CommandRunner> PrivilegeProbe for DebianHost<R> {
    fn is_superuser(&self) -> bool {
        nix::unistd::geteuid().is_root()
    }
}

impl<R: CommandRunner> ToolProbe for DebianHost<R> {
    fn is_available(&self, command: &str) -> bool {
        which::which(command).is_ok()
    }
}
