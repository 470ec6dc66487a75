//! The `examtrack results` and `examtrack subjects` commands.

use anyhow::{Context as _, Result};
use clap::Subcommand;
use comfy_table::{Cell, Table};

use examtrack_core::calendar::{date_key, results_for_date};
use examtrack_core::defaults::SUBJECTS;
use examtrack_core::scoring::calculate_net;
use examtrack_core::{ExamResult, ResultUpdate};

use crate::commands::{check_date_arg, Context};

#[derive(Subcommand)]
pub enum ResultAction {
    /// Record an exam result
    Add {
        /// Scoring config id (defaults to `default_config`)
        #[arg(long)]
        config: Option<String>,

        /// Exam name
        #[arg(long)]
        exam: String,

        /// Subject label
        #[arg(long)]
        subject: String,

        /// Correct answers
        #[arg(long)]
        correct: u32,

        /// Wrong answers
        #[arg(long, default_value = "0")]
        wrong: u32,

        /// Blank answers
        #[arg(long, default_value = "0")]
        blank: u32,
    },

    /// List recorded results, newest first
    List {
        /// Only show results from this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Change fields of a recorded result
    Update {
        /// Result id
        id: String,

        /// Scoring config id
        #[arg(long)]
        config: Option<String>,

        #[arg(long)]
        exam: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        correct: Option<u32>,

        #[arg(long)]
        wrong: Option<u32>,

        #[arg(long)]
        blank: Option<u32>,
    },

    /// Delete a result
    Delete {
        /// Result id
        id: String,
    },

    /// Delete all results
    Clear,
}

pub fn execute(mut ctx: Context, action: ResultAction) -> Result<()> {
    match action {
        ResultAction::Add {
            config,
            exam,
            subject,
            correct,
            wrong,
            blank,
        } => {
            let config_id = config.unwrap_or_else(|| ctx.config.default_config.clone());
            let exam_config = ctx
                .tracker
                .config(&config_id)
                .ok_or_else(|| anyhow::anyhow!("config not found: {config_id}"))?;
            anyhow::ensure!(
                exam_config.fits_question_cap(correct, wrong, blank),
                "{} questions exceed the {} cap of {}",
                u64::from(correct) + u64::from(wrong) + u64::from(blank),
                exam_config.name,
                exam_config.total_questions.unwrap_or_default()
            );

            let result = ctx
                .tracker
                .record_result(&config_id, &exam, &subject, correct, wrong, blank)
                .context("failed to record result")?;
            println!(
                "Recorded {} ({}): net {:.2} [{}]",
                result.exam_name, result.config_name, result.net_score, result.id
            );
        }
        ResultAction::List { date, format } => {
            if let Some(key) = &date {
                check_date_arg(key)?;
            }
            let all = ctx.tracker.results();
            let shown: Vec<&ExamResult> = match &date {
                Some(key) => results_for_date(&all, key),
                None => all.iter().collect(),
            };

            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else if shown.is_empty() {
                println!("No results recorded.");
            } else {
                println!("{}", results_table(&shown));
            }
        }
        ResultAction::Update {
            id,
            config,
            exam,
            subject,
            correct,
            wrong,
            blank,
        } => {
            let mut update = ResultUpdate {
                config_id: config,
                exam_name: exam,
                subject,
                correct,
                wrong,
                blank,
                ..Default::default()
            };
            anyhow::ensure!(!update.is_empty(), "nothing to update");

            let rescore = update.config_id.is_some()
                || correct.is_some()
                || wrong.is_some()
                || blank.is_some();
            if rescore {
                let current = ctx
                    .tracker
                    .results()
                    .into_iter()
                    .find(|r| r.id == id)
                    .ok_or_else(|| anyhow::anyhow!("result not found: {id}"))?;
                let config_id = update.config_id.as_deref().unwrap_or(&current.config_id);
                let exam_config = ctx.tracker.config(config_id).ok_or_else(|| {
                    anyhow::anyhow!("config not found: {config_id}; cannot rescore result")
                })?;
                let correct = correct.unwrap_or(current.correct);
                let wrong = wrong.unwrap_or(current.wrong);
                let blank = blank.unwrap_or(current.blank);
                anyhow::ensure!(
                    exam_config.fits_question_cap(correct, wrong, blank),
                    "counts exceed the {} question cap",
                    exam_config.name
                );

                update.net_score = Some(calculate_net(&exam_config, correct, wrong, blank));
                update.config_name = Some(exam_config.name);
            }

            let updated = ctx.tracker.update_result(&id, update)?;
            println!("Updated {}: net {:.2}", updated.id, updated.net_score);
        }
        ResultAction::Delete { id } => {
            if ctx.tracker.delete_result(&id)? {
                println!("Deleted result {id}");
            } else {
                println!("No result with id {id}");
            }
        }
        ResultAction::Clear => {
            let count = ctx.tracker.results().len();
            ctx.tracker.clear_results()?;
            println!("Cleared {count} result(s)");
        }
    }
    Ok(())
}

pub fn list_subjects() -> Result<()> {
    for subject in SUBJECTS {
        println!("{subject}");
    }
    Ok(())
}

pub(crate) fn results_table(results: &[&ExamResult]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Id", "Date", "Exam", "Subject", "Config", "Correct", "Wrong", "Blank", "Net",
    ]);
    for r in results {
        table.add_row(vec![
            Cell::new(&r.id),
            Cell::new(date_key(&r.date)),
            Cell::new(&r.exam_name),
            Cell::new(&r.subject),
            Cell::new(&r.config_name),
            Cell::new(r.correct),
            Cell::new(r.wrong),
            Cell::new(r.blank),
            Cell::new(format!("{:.2}", r.net_score)),
        ]);
    }
    table
}
