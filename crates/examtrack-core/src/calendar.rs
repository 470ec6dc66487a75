//! Calendar aggregation: per-day summaries and consecutive-day streaks.
//!
//! Results are grouped by their date key, the first 10 characters of the
//! stored ISO timestamp. That is the calendar day in whatever offset the
//! timestamp was written with.

use std::collections::HashMap;

use chrono::{Duration, Local, NaiveDate};

use crate::model::{DaySummary, ExamResult};
use crate::scoring::round2;

const DATE_KEY_LEN: usize = 10;
const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// The date key (`YYYY-MM-DD`) of a timestamp.
///
/// Shorter strings are returned whole.
pub fn date_key(timestamp: &str) -> &str {
    match timestamp.char_indices().nth(DATE_KEY_LEN) {
        Some((idx, _)) => &timestamp[..idx],
        None => timestamp,
    }
}

/// Format a date as a date key.
pub fn key_for(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Day summaries keyed by date, in first-seen order.
///
/// Iteration order follows the order dates first appear in the input, not
/// chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySummaries {
    days: Vec<DaySummary>,
    index: HashMap<String, usize>,
}

impl DaySummaries {
    pub fn get(&self, date_key: &str) -> Option<&DaySummary> {
        self.index.get(date_key).map(|&i| &self.days[i])
    }

    pub fn contains(&self, date_key: &str) -> bool {
        self.index.contains_key(date_key)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DaySummary> {
        self.days.iter()
    }

    fn add(&mut self, result: &ExamResult) {
        let key = date_key(&result.date);
        match self.index.get(key) {
            Some(&i) => {
                let day = &mut self.days[i];
                day.total_questions = day.total_questions.saturating_add(result.total_questions());
                day.correct = day.correct.saturating_add(result.correct);
                day.wrong = day.wrong.saturating_add(result.wrong);
                day.blank = day.blank.saturating_add(result.blank);
                day.net_score = round2(day.net_score + result.net_score);
                day.exam_count += 1;
            }
            None => {
                self.index.insert(key.to_string(), self.days.len());
                self.days.push(DaySummary {
                    date: key.to_string(),
                    total_questions: result.total_questions(),
                    correct: result.correct,
                    wrong: result.wrong,
                    blank: result.blank,
                    net_score: result.net_score,
                    exam_count: 1,
                });
            }
        }
    }
}

impl<'a> IntoIterator for &'a DaySummaries {
    type Item = &'a DaySummary;
    type IntoIter = std::slice::Iter<'a, DaySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Group results by date key and sum each day.
///
/// The day's net score is rounded after every addition, not once at the end,
/// so it matches previously displayed totals exactly.
pub fn day_summaries(results: &[ExamResult]) -> DaySummaries {
    let mut summaries = DaySummaries::default();
    for r in results {
        summaries.add(r);
    }
    summaries
}

/// Results whose date key equals `key`, in input order.
pub fn results_for_date<'a>(results: &'a [ExamResult], key: &str) -> Vec<&'a ExamResult> {
    results.iter().filter(|r| date_key(&r.date) == key).collect()
}

/// Number of consecutive days with results, ending today (local time).
pub fn streak(summaries: &DaySummaries) -> u32 {
    streak_from(summaries, Local::now().date_naive())
}

/// Number of consecutive days with results, ending at `today`.
///
/// Returns 0 when `today` itself has no results, even if the day before does.
pub fn streak_from(summaries: &DaySummaries, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while summaries.contains(&key_for(day)) {
        streak += 1;
        match day.checked_sub_signed(Duration::days(1)) {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}
