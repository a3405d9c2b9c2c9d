use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/harx/config.toml`.
///
/// Everything here is a default the command line can override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarxConfig {
    /// Default output directory for extracted payloads (`--directory` wins;
    /// final fallback is the current directory).
    #[serde(default)]
    pub extract_dir: Option<PathBuf>,
    /// Prefix extracted filenames with the entry index by default.
    #[serde(default)]
    pub number_files: bool,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HarxConfig = toml::from_str(&data)?;
    Ok(cfg)
}
