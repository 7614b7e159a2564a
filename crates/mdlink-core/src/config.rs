use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::detect::FenceTracking;
use crate::fetch::{default_user_agent, TitleFetchOptions, DEFAULT_MAX_CONCURRENT, DEFAULT_TIMEOUT_MS};

/// Global configuration loaded from `~/.config/mdlink/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MdlinkConfig {
    /// Request timeout for each title fetch, in milliseconds.
    pub timeout_ms: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Maximum concurrent fetches when resolving several URLs.
    pub max_concurrent: usize,
    /// Fenced-block detection: "parity" (default) or "first-line".
    pub fence_tracking: FenceTracking,
}

impl Default for MdlinkConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: default_user_agent(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            fence_tracking: FenceTracking::default(),
        }
    }
}

impl MdlinkConfig {
    /// Fetch options derived from this config.
    pub fn fetch_options(&self) -> TitleFetchOptions {
        TitleFetchOptions::default()
            .with_timeout_ms(self.timeout_ms)
            .with_user_agent(self.user_agent.clone())
            .with_max_concurrent(self.max_concurrent)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mdlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`; missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<MdlinkConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: MdlinkConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.fetch_options()
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MdlinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MdlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}
