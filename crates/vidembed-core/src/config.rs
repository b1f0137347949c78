use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Output format for CLI results: plain columns or a JSON report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Global configuration loaded from `~/.config/vidembed/config.toml`.
///
/// These are CLI defaults only; the normalizer itself takes no
/// configuration and always behaves the same.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VidembedConfig {
    /// Treat URLs that cannot be normalized as failures (non-zero exit).
    #[serde(default)]
    pub strict: bool,
    /// Default output format; the `--json` flag overrides it.
    #[serde(default)]
    pub output: OutputFormat,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vidembed")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VidembedConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VidembedConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VidembedConfig = toml::from_str(&data)?;
    Ok(cfg)
}
