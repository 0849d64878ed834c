//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::report::Step;

// ── Privilege errors ──────────────────────────────────────────────────────────

/// Errors raised while deciding how privileged commands are executed.
#[derive(Debug, Error)]
pub enum PrivilegeError {
    #[error("Must run as root, or install '{helper}' so privileged commands can be elevated.")]
    Unavailable { helper: String },
}

// ── Command errors ────────────────────────────────────────────────────────────

/// A required external command ran but exited unsuccessfully.
#[derive(Debug, Error)]
#[error("{program} exited with {status}{}", stderr_suffix(.stderr))]
pub struct CommandError {
    pub program: String,
    pub status: String,
    pub stderr: String,
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

// ── Config fetch errors ───────────────────────────────────────────────────────

/// Errors raised by the configuration selector/fetcher.
#[derive(Debug, Error)]
pub enum ConfigFetchError {
    #[error("Downloaded configuration from {url} is empty.")]
    EmptyDownload { url: String },

    #[error("Configuration file {} is missing after install.", .path.display())]
    MissingTarget { path: PathBuf },

    #[error("Configuration file {} is empty after install.", .path.display())]
    EmptyTarget { path: PathBuf },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while validating a `ProvisionConfig`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {field}: '{value}'")]
    InvalidName { field: &'static str, value: String },

    #[error("{field} must be an https:// URL, got '{url}'")]
    InsecureUrl { field: &'static str, url: String },

    #[error("repository.url_template must contain the {{version}} placeholder")]
    MissingVersionPlaceholder,

    #[error("{field} must be an absolute path, got '{}'", .path.display())]
    RelativePath { field: &'static str, path: PathBuf },

    #[error("Plugin '{0}' is listed more than once")]
    DuplicatePlugin(String),

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

// ── Step failure ──────────────────────────────────────────────────────────────

/// A fatal failure of one workflow step, keeping the underlying cause.
#[derive(Debug, Error)]
#[error("{} failed", .step.label())]
pub struct StepFailure {
    pub step: Step,
    #[source]
    pub source: anyhow::Error,
}

impl StepFailure {
    #[must_use]
    pub fn new(step: Step, source: anyhow::Error) -> Self {
        Self { step, source }
    }
}
