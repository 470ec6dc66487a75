//! The `examtrack import` and `examtrack export` commands.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::commands::Context;

pub fn import(mut ctx: Context, file: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let data = ctx
        .tracker
        .import_data(&text)
        .with_context(|| format!("failed to import {}", file.display()))?;
    println!(
        "Imported {} configs and {} results (version {})",
        data.configs.len(),
        data.results.len(),
        data.version
    );
    Ok(())
}

pub fn export(ctx: Context, results_only: bool, output: Option<PathBuf>) -> Result<()> {
    let json = if results_only {
        serde_json::to_string_pretty(&ctx.tracker.export_results())
    } else {
        serde_json::to_string_pretty(&ctx.tracker.export_data())
    }
    .context("failed to serialize export")?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write export to {}", path.display()))?;
            eprintln!("Exported to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
