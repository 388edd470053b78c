//! Subcommands of the `invx` binary.

pub mod config;
pub mod extract;
pub mod run;

use std::path::{Path, PathBuf};

use tracing::debug;

use invx_core::models::config::InvxConfig;

/// `<config dir>/invx/config.json`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("invx")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<InvxConfig> {
    if let Some(path) = config_path {
        return InvxConfig::from_file(Path::new(path))
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path, e));
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        return Ok(InvxConfig::from_file(&default_path)?);
    }

    Ok(InvxConfig::default())
}
