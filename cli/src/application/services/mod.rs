//! Application services — use-case orchestration.
//!
//! Each service module implements a single workflow component by composing
//! domain logic with port trait calls. Services import only from
//! `crate::domain` and `crate::application::ports` — never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

pub mod config_fetch;
pub mod legacy;
pub mod packages;
pub mod plugins;
pub mod privilege;
pub mod provision;
pub mod service;
pub mod status;
