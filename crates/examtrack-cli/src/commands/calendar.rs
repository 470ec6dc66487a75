//! The `examtrack calendar` command.

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

use examtrack_core::calendar::{day_summaries, results_for_date, streak};
use examtrack_core::model::DaySummary;

use crate::commands::results::results_table;
use crate::commands::{check_date_arg, Context};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CalendarOutput<'a> {
    streak: u32,
    days: Vec<&'a DaySummary>,
}

pub fn execute(ctx: Context, date: Option<String>, format: String) -> Result<()> {
    if let Some(key) = &date {
        check_date_arg(key)?;
    }

    let results = ctx.tracker.results();
    let summaries = day_summaries(&results);
    let current_streak = streak(&summaries);

    // Newest day first for display.
    let mut days: Vec<&DaySummary> = match &date {
        Some(key) => summaries.get(key).into_iter().collect(),
        None => summaries.iter().collect(),
    };
    days.sort_by(|a, b| b.date.cmp(&a.date));

    if format == "json" {
        let output = CalendarOutput {
            streak: current_streak,
            days,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if days.is_empty() {
        println!("No results recorded.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            "Date", "Exams", "Questions", "Correct", "Wrong", "Blank", "Net",
        ]);
        for d in &days {
            table.add_row(vec![
                Cell::new(&d.date),
                Cell::new(d.exam_count),
                Cell::new(d.total_questions),
                Cell::new(d.correct),
                Cell::new(d.wrong),
                Cell::new(d.blank),
                Cell::new(format!("{:.2}", d.net_score)),
            ]);
        }
        println!("{table}");
    }

    if let Some(key) = &date {
        let on_day = results_for_date(&results, key);
        if !on_day.is_empty() {
            println!("\n{}", results_table(&on_day));
        }
    }

    println!("\nStreak: {current_streak} day(s)");
    Ok(())
}
