use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/fabkit/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FabkitConfig {
    /// Glob patterns of hosts a redirect may target. Empty means "the request's own host".
    #[serde(default, alias = "FAB_SAFE_REDIRECT_HOSTS")]
    pub safe_redirect_hosts: Vec<String>,
    /// Where rejected redirects land.
    #[serde(default = "default_index_url")]
    pub index_url: String,
    /// Host URL of the current request (e.g. `http://localhost:5000/`), used when no
    /// explicit one is supplied.
    #[serde(default)]
    pub host_url: Option<String>,
    /// Optional message catalog (`.toml` or `.json`).
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_index_url() -> String {
    "/".to_string()
}

impl Default for FabkitConfig {
    fn default() -> Self {
        Self {
            safe_redirect_hosts: Vec::new(),
            index_url: default_index_url(),
            host_url: None,
            catalog: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fabkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FabkitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FabkitConfig::default();
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

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Result<FabkitConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: FabkitConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
