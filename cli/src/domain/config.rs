//! Domain types and validators for the provisioning configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Name rules ───────────────────────────────────────────────────────────────

/// Debian policy §5.6.1 package names.
pub static PACKAGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9][a-z0-9+.\-]+$").expect("valid regex")
});

/// systemd unit names, with or without the `.service` suffix.
pub static UNIT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9:_.@\\-]+$").expect("valid regex")
});

/// Bare command names or absolute paths looked up on PATH.
pub static COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9_./+\-]+$").expect("valid regex")
});

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_REPOSITORY_URL_TEMPLATE: &str = "https://repo.zabbix.com/zabbix/{version}/ubuntu/pool/main/z/zabbix-release/zabbix-release_latest_{version}+ubuntu{release}_all.deb";
pub const DEFAULT_GPU_CONFIG_URL: &str =
    "https://raw.githubusercontent.com/zbx-provision/agent-configs/main/zabbix_agent2.gpu.conf";
pub const DEFAULT_CONFIG_URL: &str =
    "https://raw.githubusercontent.com/zbx-provision/agent-configs/main/zabbix_agent2.conf";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration, optionally loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProvisionConfig {
    pub privilege: PrivilegeConfig,
    pub legacy: LegacyConfig,
    pub repository: RepositoryConfig,
    pub agent: AgentConfig,
    pub remote_config: RemoteConfig,
    pub timeouts: Timeouts,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PrivilegeConfig {
    /// Elevation helper used when not running as root.
    pub helper: String,
}

impl Default for PrivilegeConfig {
    fn default() -> Self {
        Self {
            helper: "sudo".to_owned(),
        }
    }
}

/// The agent package being retired.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LegacyConfig {
    pub package: String,
    pub service: String,
    /// Deleted best-effort after the purge.
    pub leftover_files: Vec<PathBuf>,
    /// Deleted recursively, best-effort, after the purge. Empty by default.
    pub leftover_dirs: Vec<PathBuf>,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            package: "zabbix-agent".to_owned(),
            service: "zabbix-agent".to_owned(),
            leftover_files: vec![
                PathBuf::from("/etc/zabbix/zabbix_agentd.conf"),
                PathBuf::from("/etc/zabbix/zabbix_agentd.psk"),
            ],
            leftover_dirs: Vec::new(),
        }
    }
}

/// The vendor repository release package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Marker package whose registration means the repository is set up.
    pub package: String,
    /// Vendor release series substituted for `{version}`.
    pub version: String,
    /// Distribution release substituted for `{release}`.
    pub release: String,
    pub url_template: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            package: "zabbix-release".to_owned(),
            version: "7.0".to_owned(),
            release: "24.04".to_owned(),
            url_template: DEFAULT_REPOSITORY_URL_TEMPLATE.to_owned(),
        }
    }
}

impl RepositoryConfig {
    /// Render the release artifact URL.
    #[must_use]
    pub fn artifact_url(&self) -> String {
        self.url_template
            .replace("{version}", &self.version)
            .replace("{release}", &self.release)
    }

    /// File name for the downloaded artifact: the URL's last path segment.
    #[must_use]
    pub fn artifact_file_name(&self) -> String {
        let url = self.artifact_url();
        url.rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .map_or_else(|| format!("{}.deb", self.package), str::to_owned)
    }
}

/// The agent package, its plugins and its service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AgentConfig {
    pub package: String,
    pub service: String,
    /// Installed on every run without a presence check.
    pub plugins: Vec<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            package: "zabbix-agent2".to_owned(),
            service: "zabbix-agent2".to_owned(),
            plugins: vec![
                "zabbix-agent2-plugin-mongodb".to_owned(),
                "zabbix-agent2-plugin-mssql".to_owned(),
                "zabbix-agent2-plugin-postgresql".to_owned(),
            ],
        }
    }
}

/// Where the agent configuration comes from and where it goes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RemoteConfig {
    /// Command whose presence on PATH selects the GPU variant.
    pub probe_command: String,
    pub gpu_url: String,
    pub default_url: String,
    pub target: PathBuf,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            probe_command: "nvidia-smi".to_owned(),
            gpu_url: DEFAULT_GPU_CONFIG_URL.to_owned(),
            default_url: DEFAULT_CONFIG_URL.to_owned(),
            target: PathBuf::from("/etc/zabbix/zabbix_agent2.conf"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Timeouts {
    /// Upper bound for each external command.
    pub command_secs: u64,
    /// Upper bound for each download. Unset means no timeout.
    pub download_secs: Option<u64>,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            command_secs: 1800,
            download_secs: None,
        }
    }
}

impl Timeouts {
    #[must_use]
    pub fn command(&self) -> Duration {
        Duration::from_secs(self.command_secs)
    }

    #[must_use]
    pub fn download(&self) -> Option<Duration> {
        self.download_secs.map(Duration::from_secs)
    }
}

// ── Validation ───────────────────────────────────────────────────────────────

impl ProvisionConfig {
    /// Check every name, URL, path and timeout.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_name(&COMMAND_RE, "privilege.helper", &self.privilege.helper)?;

        check_name(&PACKAGE_NAME_RE, "legacy.package", &self.legacy.package)?;
        check_name(&UNIT_NAME_RE, "legacy.service", &self.legacy.service)?;
        for path in &self.legacy.leftover_files {
            check_absolute("legacy.leftover_files", path)?;
        }
        for path in &self.legacy.leftover_dirs {
            check_absolute("legacy.leftover_dirs", path)?;
        }

        check_name(&PACKAGE_NAME_RE, "repository.package", &self.repository.package)?;
        if !self.repository.url_template.contains("{version}") {
            return Err(ConfigError::MissingVersionPlaceholder);
        }
        check_https("repository.url_template", &self.repository.url_template)?;

        check_name(&PACKAGE_NAME_RE, "agent.package", &self.agent.package)?;
        check_name(&UNIT_NAME_RE, "agent.service", &self.agent.service)?;
        let mut seen = HashSet::new();
        for plugin in &self.agent.plugins {
            check_name(&PACKAGE_NAME_RE, "agent.plugins", plugin)?;
            if !seen.insert(plugin.as_str()) {
                return Err(ConfigError::DuplicatePlugin(plugin.clone()));
            }
        }

        check_name(&COMMAND_RE, "remote_config.probe_command", &self.remote_config.probe_command)?;
        check_https("remote_config.gpu_url", &self.remote_config.gpu_url)?;
        check_https("remote_config.default_url", &self.remote_config.default_url)?;
        check_absolute("remote_config.target", &self.remote_config.target)?;

        if self.timeouts.command_secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                field: "timeouts.command_secs",
            });
        }
        if self.timeouts.download_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout {
                field: "timeouts.download_secs",
            });
        }
        Ok(())
    }
}

fn check_name(re: &Regex, field: &'static str, value: &str) -> Result<(), ConfigError> {
    if re.is_match(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidName {
            field,
            value: value.to_owned(),
        })
    }
}

fn check_https(field: &'static str, url: &str) -> Result<(), ConfigError> {
    let rest = url.strip_prefix("https://").unwrap_or_default();
    if rest.is_empty() || rest.starts_with('/') {
        return Err(ConfigError::InsecureUrl {
            field,
            url: url.to_owned(),
        });
    }
    Ok(())
}

fn check_absolute(field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.is_absolute() {
        Ok(())
    } else {
        Err(ConfigError::RelativePath {
            field,
            path: path.to_path_buf(),
        })
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
