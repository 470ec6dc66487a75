//! The `examtrack init` command.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::commands::Context;
use crate::config::LOCAL_CONFIG;

pub fn execute(data_dir: Option<PathBuf>, config_path: Option<&Path>) -> Result<()> {
    if Path::new(LOCAL_CONFIG).exists() {
        println!("{LOCAL_CONFIG} already exists, skipping.");
    } else {
        std::fs::write(LOCAL_CONFIG, SAMPLE_CONFIG)
            .with_context(|| format!("failed to write {LOCAL_CONFIG}"))?;
        println!("Created {LOCAL_CONFIG}");
    }

    let mut ctx = Context::open(data_dir, config_path)?;
    let dir = ctx.config.data_dir.clone();
    let document = ctx
        .tracker
        .store()
        .path_for(examtrack_core::tracker::DATA_KEY)?;
    if document.exists() {
        println!("{} already exists, skipping.", document.display());
    } else {
        let data = ctx.tracker.load();
        ctx.tracker
            .save(&data)
            .with_context(|| format!("failed to seed data directory {}", dir.display()))?;
        println!(
            "Seeded {} with {} default configs",
            dir.display(),
            data.configs.len()
        );
    }

    println!("\nNext steps:");
    println!("  1. List scoring configs: examtrack configs list");
    println!("  2. Record an exam: examtrack results add --exam \"Deneme 1\" --subject Matematik --correct 30 --wrong 8 --blank 2");
    println!("  3. See your calendar: examtrack calendar");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# examtrack configuration

# Where the exam document and theme preference are stored.
data_dir = "examtrack-data"

# Scoring config used by `results add` when --config is not given.
default_config = "yks"
"#;
