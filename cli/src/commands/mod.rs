//! Command implementations

pub mod install;
pub mod show_config;
pub mod status;
