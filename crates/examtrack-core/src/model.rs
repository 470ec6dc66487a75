//! Core data model types for examtrack.
//!
//! Field names serialize in camelCase so stored documents and exports stay
//! interchangeable with earlier versions of the tracker.

use serde::{Deserialize, Serialize};

/// A scoring profile for one exam type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamConfig {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Points per correct answer.
    pub correct_multiplier: f64,
    /// Points per wrong answer (usually negative).
    pub wrong_multiplier: f64,
    /// Points per blank answer.
    pub blank_multiplier: f64,
    /// Optional cap on the number of questions in one attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<u32>,
    /// Built-in configs are always present and cannot be deleted.
    #[serde(default)]
    pub is_default: bool,
}

impl ExamConfig {
    /// Returns `true` if the counts respect the question cap, if any.
    pub fn fits_question_cap(&self, correct: u32, wrong: u32, blank: u32) -> bool {
        match self.total_questions {
            Some(cap) => {
                u64::from(correct) + u64::from(wrong) + u64::from(blank) <= u64::from(cap)
            }
            None => true,
        }
    }
}

/// Input for [`ExamTracker::add_config`](crate::tracker::ExamTracker::add_config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConfig {
    pub name: String,
    pub correct_multiplier: f64,
    pub wrong_multiplier: f64,
    pub blank_multiplier: f64,
    #[serde(default)]
    pub total_questions: Option<u32>,
    #[serde(default)]
    pub is_default: bool,
}

impl NewConfig {
    pub(crate) fn with_id(self, id: String) -> ExamConfig {
        ExamConfig {
            id,
            name: self.name,
            correct_multiplier: self.correct_multiplier,
            wrong_multiplier: self.wrong_multiplier,
            blank_multiplier: self.blank_multiplier,
            total_questions: self.total_questions,
            is_default: self.is_default,
        }
    }
}

/// A single recorded exam attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    /// Unique identifier, fixed at creation.
    pub id: String,
    /// Id of the config used to score this attempt.
    pub config_id: String,
    /// Config name at the time the result was recorded.
    pub config_name: String,
    pub exam_name: String,
    pub subject: String,
    pub correct: u32,
    pub wrong: u32,
    pub blank: u32,
    pub net_score: f64,
    /// ISO-8601 creation timestamp, fixed at creation.
    pub date: String,
}

impl ExamResult {
    /// Total number of questions answered or left blank.
    pub fn total_questions(&self) -> u32 {
        self.correct
            .saturating_add(self.wrong)
            .saturating_add(self.blank)
    }
}

/// Input for [`ExamTracker::add_result`](crate::tracker::ExamTracker::add_result).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResult {
    pub config_id: String,
    pub config_name: String,
    pub exam_name: String,
    pub subject: String,
    pub correct: u32,
    pub wrong: u32,
    pub blank: u32,
    pub net_score: f64,
}

impl NewResult {
    pub(crate) fn into_result(self, id: String, date: String) -> ExamResult {
        ExamResult {
            id,
            config_id: self.config_id,
            config_name: self.config_name,
            exam_name: self.exam_name,
            subject: self.subject,
            correct: self.correct,
            wrong: self.wrong,
            blank: self.blank,
            net_score: self.net_score,
            date,
        }
    }
}

/// A partial update to an [`ExamResult`]. `None` fields are left as they are.
///
/// There is no `id` or `date` here: both are immutable after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultUpdate {
    #[serde(default)]
    pub config_id: Option<String>,
    #[serde(default)]
    pub config_name: Option<String>,
    #[serde(default)]
    pub exam_name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub correct: Option<u32>,
    #[serde(default)]
    pub wrong: Option<u32>,
    #[serde(default)]
    pub blank: Option<u32>,
    #[serde(default)]
    pub net_score: Option<f64>,
}

impl ResultUpdate {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == ResultUpdate::default()
    }

    /// Merge the set fields into `result`.
    pub fn apply_to(self, result: &mut ExamResult) {
        if let Some(v) = self.config_id {
            result.config_id = v;
        }
        if let Some(v) = self.config_name {
            result.config_name = v;
        }
        if let Some(v) = self.exam_name {
            result.exam_name = v;
        }
        if let Some(v) = self.subject {
            result.subject = v;
        }
        if let Some(v) = self.correct {
            result.correct = v;
        }
        if let Some(v) = self.wrong {
            result.wrong = v;
        }
        if let Some(v) = self.blank {
            result.blank = v;
        }
        if let Some(v) = self.net_score {
            result.net_score = v;
        }
    }
}

/// The whole persisted document. Loaded and saved as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    pub configs: Vec<ExamConfig>,
    /// Newest first.
    pub results: Vec<ExamResult>,
    pub version: String,
}

/// Aggregate of all results sharing one calendar date. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    /// Date key (`YYYY-MM-DD`).
    pub date: String,
    pub total_questions: u32,
    pub correct: u32,
    pub wrong: u32,
    pub blank: u32,
    /// Sum of net scores, rounded to 2 decimals after each addition.
    pub net_score: f64,
    pub exam_count: u32,
}
