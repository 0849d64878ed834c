//! `show-config` — print the effective configuration.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::app::AppContext;
use crate::domain::ProvisionConfig;
use crate::output::json;

#[derive(Serialize)]
struct ShowConfigOutput<'a> {
    source: String,
    config: &'a ProvisionConfig,
}

/// Print the configuration as YAML, or JSON with `--json`. Printed even
/// with `--quiet`, since it is the command's only output.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn run(app: &AppContext) -> Result<()> {
    let source = app
        .config_path
        .as_ref()
        .map_or_else(|| "built-in defaults".to_owned(), |p| p.display().to_string());
    if app.is_json() {
        return json::print(&ShowConfigOutput {
            source,
            config: &app.config,
        });
    }
    let yaml = serde_yaml::to_string(&app.config).context("cannot serialize config")?;
    println!("# source: {source}");
    print!("{yaml}");
    Ok(())
}
