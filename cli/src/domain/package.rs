//! Package presence, parsed from `dpkg -l` listings.

use serde::Serialize;

/// State of a single package as reported by dpkg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageState {
    /// Not listed, or listed as `un`/`pn`.
    NotInstalled,
    /// `ii`: fully installed.
    Installed,
    /// `rc`: removed, configuration files remain.
    ConfigFiles,
    /// Any other desired/status pair (half-installed, unpacked, ...).
    Other(String),
}

impl PackageState {
    #[must_use]
    pub fn is_installed(&self) -> bool {
        *self == Self::Installed
    }

    /// Anything dpkg still tracks on disk for this package.
    #[must_use]
    pub fn has_footprint(&self) -> bool {
        *self != Self::NotInstalled
    }

    fn from_flags(flags: &str) -> Self {
        match flags {
            "ii" => Self::Installed,
            "rc" => Self::ConfigFiles,
            "un" | "pn" => Self::NotInstalled,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Find `package` in a `dpkg -l` listing and return its state.
///
/// Matches the package column exactly, ignoring an `:arch` qualifier, so
/// `zabbix-agent` never matches `zabbix-agent2`.
#[must_use]
pub fn parse_dpkg_list(listing: &str, package: &str) -> PackageState {
    listing
        .lines()
        .filter_map(|line| {
            let mut cols = line.split_whitespace();
            let flags = cols.next()?;
            let name = cols.next()?;
            let bare = name.split(':').next().unwrap_or(name);
            is_flag_column(flags)
                .then_some((flags, bare))
                .filter(|(_, bare)| *bare == package)
        })
        .map(|(flags, _)| PackageState::from_flags(flags))
        .next()
        .unwrap_or(PackageState::NotInstalled)
}

/// Data rows start with a two or three letter lowercase flag column; header
/// rows start with `Desired=`, `|` or `+++-`.
fn is_flag_column(flags: &str) -> bool {
    (2..=3).contains(&flags.len())
        && flags.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_uppercase())
}
