//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::Result;

use examtrack_core::{ExamTracker, FileStore};

use crate::config::{load_config_from, TrackerConfig};

pub mod calendar;
pub mod configs;
pub mod init;
pub mod results;
pub mod theme;
pub mod transfer;

/// Loaded configuration plus a tracker over the resolved data directory.
pub struct Context {
    pub config: TrackerConfig,
    pub tracker: ExamTracker<FileStore>,
}

impl Context {
    /// Load config and open the file store. `--data-dir` wins over the config
    /// file and the environment.
    pub fn open(data_dir: Option<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let mut config = load_config_from(config_path)?;
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        tracing::debug!(data_dir = %config.data_dir.display(), "opening tracker");
        let tracker = ExamTracker::new(FileStore::new(&config.data_dir));
        Ok(Self { config, tracker })
    }
}

/// Reject a `--date` value that is not a `YYYY-MM-DD` calendar date.
pub(crate) fn check_date_arg(key: &str) -> Result<()> {
    anyhow::ensure!(
        chrono::NaiveDate::parse_from_str(key, "%Y-%m-%d").is_ok(),
        "invalid date '{key}', expected YYYY-MM-DD"
    );
    Ok(())
}
