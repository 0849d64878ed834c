//! Infrastructure implementation of the `ConfigStore` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::ProvisionConfig;

/// Read when neither `--config` nor `ZBX_PROVISION_CONFIG` is given.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/zbx-provision/config.yaml";

/// Production implementation of `ConfigStore` that reads a YAML file.
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
    system: PathBuf,
}

impl YamlConfigStore {
    /// `explicit` comes from `--config` or `ZBX_PROVISION_CONFIG`; clap
    /// merges the two.
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            system: PathBuf::from(SYSTEM_CONFIG_PATH),
        }
    }

    /// Override the system-wide fallback path.
    #[must_use]
    pub fn with_system_path(mut self, system: PathBuf) -> Self {
        self.system = system;
        self
    }
}

/// An explicit path always wins and must exist. Otherwise the system path
/// is used only if present.
#[must_use]
pub fn resolve_config_path(explicit: Option<&Path>, system: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if system.exists() => Some(system.to_path_buf()),
        None => None,
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<ProvisionConfig> {
        let Some(path) = self.path()? else {
            return Ok(ProvisionConfig::default());
        };
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(ProvisionConfig::default());
        }
        let config: ProvisionConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    fn path(&self) -> Result<Option<PathBuf>> {
        Ok(resolve_config_path(self.explicit.as_deref(), &self.system))
    }
}
