//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, package
//! and service management, downloads, file placement, and config loading.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod apt;
pub mod command_runner;
pub mod config;
pub mod download;
pub mod fs;
pub mod host;
pub mod systemd;

pub use command_runner::TokioCommandRunner;
pub use config::YamlConfigStore;
pub use host::DebianHost;
