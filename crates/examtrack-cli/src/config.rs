//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// File name searched for in the current directory.
pub const LOCAL_CONFIG: &str = "examtrack.toml";

/// Environment variable overriding `data_dir`.
pub const DATA_DIR_ENV: &str = "EXAMTRACK_DATA_DIR";

/// Top-level examtrack configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    /// Directory holding the stored document and theme.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Config id used by `results add` when `--config` is not given.
    #[serde(default = "default_config_id")]
    pub default_config: String,
}

fn default_data_dir() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("examtrack"),
        Err(_) => PathBuf::from("./examtrack-data"),
    }
}

fn default_config_id() -> String {
    "yks".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_config: default_config_id(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `examtrack.toml` in the current directory
/// 2. `~/.config/examtrack/config.toml`
///
/// `EXAMTRACK_DATA_DIR` overrides `data_dir` from any source.
pub fn load_config_from(path: Option<&Path>) -> Result<TrackerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            Some(local)
        } else {
            global_config_path().filter(|p| p.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<TrackerConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => TrackerConfig::default(),
    };

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|h| {
        PathBuf::from(h)
            .join(".config")
            .join("examtrack")
            .join("config.toml")
    })
}
