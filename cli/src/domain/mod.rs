//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod package;
pub mod privilege;
pub mod report;
pub mod variant;

pub use config::ProvisionConfig;
pub use error::{CommandError, ConfigError, ConfigFetchError, PrivilegeError, StepFailure};
pub use package::{PackageState, parse_dpkg_list};
pub use privilege::Elevation;
pub use report::{FetchedConfig, HostStatus, NamedState, ProvisionReport, Step, StepOutcome};
pub use variant::ConfigVariant;
