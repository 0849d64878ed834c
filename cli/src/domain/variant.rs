//! Configuration variant selection.

use std::fmt;

use serde::Serialize;

use crate::domain::config::RemoteConfig;

/// Which remote agent configuration applies to this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigVariant {
    Gpu,
    NonGpu,
}

impl ConfigVariant {
    /// The probe tool's presence on PATH is the only input.
    #[must_use]
    pub fn select(probe_present: bool) -> Self {
        if probe_present { Self::Gpu } else { Self::NonGpu }
    }

    #[must_use]
    pub fn url(self, remote: &RemoteConfig) -> &str {
        match self {
            Self::Gpu => &remote.gpu_url,
            Self::NonGpu => &remote.default_url,
        }
    }
}

impl fmt::Display for ConfigVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gpu => "GPU",
            Self::NonGpu => "non-GPU",
        })
    }
}
