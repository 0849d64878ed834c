//! Download infrastructure — implements `Downloader` with ureq.
//!
//! The blocking transfer runs on `spawn_blocking` and lands in a fresh
//! temporary directory owned by the returned `Download`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::{CommandRunner, Download, Downloader};
use crate::infra::host::DebianHost;

impl<R: CommandRunner> Downloader for DebianHost<R> {
    async fn fetch(&self, url: &str, file_name: &str) -> Result<Download> {
        let dir = tempfile::Builder::new()
            .prefix("zbx-provision-")
            .tempdir()
            .context("creating temporary directory")?;
        let path = dir.path().join(file_name);

        let url_owned = url.to_owned();
        let dest = path.clone();
        let timeout = self.download_timeout;
        let show_progress = self.show_progress;
        let bytes = tokio::task::spawn_blocking(move || {
            download_to(&url_owned, &dest, timeout, show_progress)
        })
        .await
        .map_err(|e| anyhow::anyhow!("spawn_blocking panicked: {e}"))??;

        info!(%url, bytes, path = %path.display(), "download complete");
        Ok(Download {
            path,
            bytes,
            guard: Box::new(dir),
        })
    }
}

fn download_to(
    url: &str,
    dest: &Path,
    timeout: Option<Duration>,
    show_progress: bool,
) -> Result<u64> {
    let mut builder = ureq::AgentBuilder::new();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    let agent = builder.build();

    let response = match agent.get(url).call() {
        Ok(r) => r,
        Err(ureq::Error::Status(code, _)) => anyhow::bail!("Download failed: HTTP {code}"),
        Err(e) => return Err(e).context("Download failed"),
    };

    let total = response
        .header("Content-Length")
        .and_then(|v| v.parse::<u64>().ok());
    let pb = make_progress_bar(show_progress, total);

    let mut file = File::create(dest).with_context(|| format!("creating {}", dest.display()))?;
    let mut reader = response.into_reader();
    let mut buf = vec![0u8; 64 * 1024];
    let mut written = 0u64;
    loop {
        let n = reader.read(&mut buf).context("Download interrupted")?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])
            .with_context(|| format!("writing {}", dest.display()))?;
        written += n as u64;
        pb.inc(n as u64);
    }
    pb.finish_and_clear();
    file.sync_all()
        .with_context(|| format!("flushing {}", dest.display()))?;
    Ok(written)
}

fn make_progress_bar(show: bool, total: Option<u64>) -> indicatif::ProgressBar {
    if !show {
        return indicatif::ProgressBar::hidden();
    }
    if let Some(t) = total {
        let pb = indicatif::ProgressBar::new(t);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("    {bar:40.cyan/dim} {percent}%  {bytes}/{total_bytes}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
                .progress_chars("━━─"),
        );
        pb
    } else {
        indicatif::ProgressBar::new_spinner()
    }
}
