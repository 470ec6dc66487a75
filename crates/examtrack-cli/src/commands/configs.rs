//! The `examtrack configs` commands.

use anyhow::{Context as _, Result};
use clap::Subcommand;
use comfy_table::{Cell, Table};

use examtrack_core::NewConfig;

use crate::commands::Context;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// List scoring configs
    List,

    /// Add a scoring config
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Points per correct answer
        #[arg(long, default_value = "1")]
        correct: f64,

        /// Points per wrong answer
        #[arg(long, default_value = "-0.25", allow_hyphen_values = true)]
        wrong: f64,

        /// Points per blank answer
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        blank: f64,

        /// Maximum questions per exam
        #[arg(long)]
        total_questions: Option<u32>,
    },

    /// Delete a user-defined scoring config
    Delete {
        /// Config id
        id: String,
    },
}

pub fn execute(mut ctx: Context, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::List => {
            let mut table = Table::new();
            table.set_header(vec!["Id", "Name", "Correct", "Wrong", "Blank", "Questions", ""]);
            for c in ctx.tracker.configs() {
                table.add_row(vec![
                    Cell::new(&c.id),
                    Cell::new(&c.name),
                    Cell::new(c.correct_multiplier),
                    Cell::new(c.wrong_multiplier),
                    Cell::new(c.blank_multiplier),
                    Cell::new(
                        c.total_questions
                            .map(|n| n.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    ),
                    Cell::new(if c.is_default { "default" } else { "" }),
                ]);
            }
            println!("{table}");
        }
        ConfigAction::Add {
            name,
            correct,
            wrong,
            blank,
            total_questions,
        } => {
            anyhow::ensure!(!name.trim().is_empty(), "config name must not be empty");
            anyhow::ensure!(
                [correct, wrong, blank].iter().all(|m| m.is_finite()),
                "multipliers must be finite numbers"
            );
            let config = ctx
                .tracker
                .add_config(NewConfig {
                    name,
                    correct_multiplier: correct,
                    wrong_multiplier: wrong,
                    blank_multiplier: blank,
                    total_questions,
                    is_default: false,
                })
                .context("failed to add config")?;
            println!("Added config {} ({})", config.id, config.name);
        }
        ConfigAction::Delete { id } => {
            ctx.tracker.delete_config(&id)?;
            println!("Deleted config {id}");
        }
    }
    Ok(())
}
