//! Application service — agent configuration selection and fetch.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::{Downloader, ProgressReporter, SystemFiles, ToolProbe};
use crate::domain::config::RemoteConfig;
use crate::domain::{ConfigFetchError, ConfigVariant, Elevation, FetchedConfig};

/// Pick the configuration variant from the hardware probe's presence.
pub fn select_variant(probe: &impl ToolProbe, remote: &RemoteConfig) -> ConfigVariant {
    let present = probe.is_available(&remote.probe_command);
    let variant = ConfigVariant::select(present);
    info!(probe = %remote.probe_command, present, %variant, "selected configuration variant");
    variant
}

/// Download the selected configuration and write it over the target path.
///
/// An empty download fails before the target is touched, so a previously
/// written configuration survives. The target is re-checked after placement.
///
/// # Errors
///
/// Returns an error if the download or placement fails, or a
/// `ConfigFetchError` if either the download or the written file is empty.
pub async fn fetch_agent_config(
    host: &(impl ToolProbe + Downloader + SystemFiles),
    elevation: &Elevation,
    remote: &RemoteConfig,
    reporter: &impl ProgressReporter,
) -> Result<FetchedConfig> {
    let variant = select_variant(host, remote);
    let url = variant.url(remote);
    reporter.step(&format!("fetching {variant} configuration..."));

    let file_name = remote
        .target
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("agent.conf");
    let download = host
        .fetch(url, file_name)
        .await
        .with_context(|| format!("downloading {url}"))?;
    if download.bytes == 0 {
        return Err(ConfigFetchError::EmptyDownload { url: url.to_owned() }.into());
    }

    host.place_file(elevation, &download.path, &remote.target)
        .await
        .with_context(|| format!("writing {}", remote.target.display()))?;
    drop(download);

    let bytes = match host.file_size(&remote.target)? {
        None => {
            return Err(ConfigFetchError::MissingTarget {
                path: remote.target.clone(),
            }
            .into());
        }
        Some(0) => {
            return Err(ConfigFetchError::EmptyTarget {
                path: remote.target.clone(),
            }
            .into());
        }
        Some(n) => n,
    };

    reporter.success(&format!(
        "{variant} configuration written to {} ({bytes} bytes)",
        remote.target.display()
    ));
    Ok(FetchedConfig {
        variant,
        url: url.to_owned(),
        bytes,
    })
}
