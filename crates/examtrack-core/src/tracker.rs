//! Data access layer over the persisted document.
//!
//! Every operation loads the whole [`AppData`] document from the store,
//! changes it in memory, and writes it back wholesale. There is no partial
//! persistence and no locking: the last writer wins.

use chrono::{Local, SecondsFormat};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::defaults::{backfill_defaults, default_document, is_default_id};
use crate::error::{ImportError, TrackerError};
use crate::id::generate_id;
use crate::model::{AppData, ExamConfig, ExamResult, NewConfig, NewResult, ResultUpdate};
use crate::scoring::calculate_net;
use crate::storage::KeyValueStore;
use crate::theme::{self, Theme};

/// Storage key for the application document.
pub const DATA_KEY: &str = "examtrack-data";

/// Top-level fields an imported document must carry.
const REQUIRED_FIELDS: [&str; 3] = ["configs", "results", "version"];

/// Validate and decode a full document from JSON text.
///
/// Checks that the text is a JSON object carrying non-null `configs`,
/// `results`, and a non-empty `version`, then decodes it with full type
/// checking. No default back-fill is applied here.
pub fn parse_document(text: &str) -> Result<AppData, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::InvalidJson)?;
    let object = value.as_object().ok_or(ImportError::NotAnObject)?;

    for field in REQUIRED_FIELDS {
        let present = match object.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        };
        if !present {
            return Err(ImportError::MissingField(field));
        }
    }

    serde_json::from_value(value).map_err(ImportError::InvalidShape)
}

/// Current local time in the stored timestamp format
/// (`2025-03-01T09:15:00.000+03:00`).
///
/// The offset is the local one so that the date prefix is the local calendar
/// day, the same calendar [`streak`](crate::calendar::streak) counts in.
fn now_timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// Exam tracker backed by a [`KeyValueStore`].
pub struct ExamTracker<S> {
    store: S,
}

impl<S: KeyValueStore> ExamTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Load the document, falling back to a fresh one when it is absent,
    /// unreadable, or corrupt. Missing default configs are prepended.
    pub fn load(&self) -> AppData {
        let raw = match self.store.get(DATA_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored document, using defaults");
                return default_document();
            }
            Err(e) => {
                warn!(error = %e, "failed to read stored document, using defaults");
                return default_document();
            }
        };

        match serde_json::from_str::<AppData>(&raw) {
            Ok(mut data) => {
                let added = backfill_defaults(&mut data);
                if added > 0 {
                    debug!(added, "restored missing default configs");
                }
                data
            }
            Err(e) => {
                warn!(error = %e, "stored document is corrupt, using defaults");
                default_document()
            }
        }
    }

    /// Serialize and overwrite the stored document.
    pub fn save(&mut self, data: &AppData) -> Result<(), TrackerError> {
        let json = serde_json::to_string(data).map_err(TrackerError::Serialize)?;
        self.store.set(DATA_KEY, &json)?;
        debug!(
            configs = data.configs.len(),
            results = data.results.len(),
            "saved document"
        );
        Ok(())
    }

    // --- Configs ---

    pub fn configs(&self) -> Vec<ExamConfig> {
        self.load().configs
    }

    pub fn config(&self, id: &str) -> Option<ExamConfig> {
        self.load().configs.into_iter().find(|c| c.id == id)
    }

    /// Append a new config under a fresh id.
    pub fn add_config(&mut self, config: NewConfig) -> Result<ExamConfig, TrackerError> {
        let mut data = self.load();
        let config = config.with_id(generate_id());
        data.configs.push(config.clone());
        self.save(&data)?;
        debug!(id = %config.id, name = %config.name, "added config");
        Ok(config)
    }

    /// Remove a user config. Default configs and unknown ids are rejected
    /// without touching the store.
    pub fn delete_config(&mut self, id: &str) -> Result<(), TrackerError> {
        let mut data = self.load();
        let config = data
            .configs
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| TrackerError::ConfigNotFound(id.to_string()))?;
        if config.is_default || is_default_id(id) {
            return Err(TrackerError::ProtectedConfig(id.to_string()));
        }

        data.configs.retain(|c| c.id != id);
        self.save(&data)?;
        debug!(id, "deleted config");
        Ok(())
    }

    // --- Results ---

    /// All results, newest first.
    pub fn results(&self) -> Vec<ExamResult> {
        self.load().results
    }

    /// Store a new result under a fresh id and the current time. The result
    /// goes to the front of the list.
    pub fn add_result(&mut self, result: NewResult) -> Result<ExamResult, TrackerError> {
        let mut data = self.load();
        let result = result.into_result(generate_id(), now_timestamp());
        data.results.insert(0, result.clone());
        self.save(&data)?;
        debug!(
            id = %result.id,
            config = %result.config_id,
            net = result.net_score,
            "added result"
        );
        Ok(result)
    }

    /// Score an attempt with the named config and store it.
    pub fn record_result(
        &mut self,
        config_id: &str,
        exam_name: &str,
        subject: &str,
        correct: u32,
        wrong: u32,
        blank: u32,
    ) -> Result<ExamResult, TrackerError> {
        let config = self
            .config(config_id)
            .ok_or_else(|| TrackerError::ConfigNotFound(config_id.to_string()))?;
        let net_score = calculate_net(&config, correct, wrong, blank);
        self.add_result(NewResult {
            config_id: config.id,
            config_name: config.name,
            exam_name: exam_name.to_string(),
            subject: subject.to_string(),
            correct,
            wrong,
            blank,
            net_score,
        })
    }

    /// Merge `update` into the result with `id` and return the new record.
    pub fn update_result(
        &mut self,
        id: &str,
        update: ResultUpdate,
    ) -> Result<ExamResult, TrackerError> {
        let mut data = self.load();
        let result = data
            .results
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| TrackerError::ResultNotFound(id.to_string()))?;
        update.apply_to(result);
        let updated = result.clone();

        self.save(&data)?;
        debug!(id, "updated result");
        Ok(updated)
    }

    /// Remove the result with `id`. Returns whether anything was removed.
    pub fn delete_result(&mut self, id: &str) -> Result<bool, TrackerError> {
        let mut data = self.load();
        let before = data.results.len();
        data.results.retain(|r| r.id != id);
        let removed = data.results.len() != before;
        self.save(&data)?;
        debug!(id, removed, "deleted result");
        Ok(removed)
    }

    pub fn clear_results(&mut self) -> Result<(), TrackerError> {
        let mut data = self.load();
        let cleared = data.results.len();
        data.results.clear();
        self.save(&data)?;
        debug!(cleared, "cleared results");
        Ok(())
    }

    // --- Import/Export ---

    /// The full document, as stored.
    pub fn export_data(&self) -> AppData {
        self.load()
    }

    pub fn export_results(&self) -> Vec<ExamResult> {
        self.load().results
    }

    /// Replace the stored document with one parsed from `json`.
    ///
    /// The text is validated first; on any failure the stored document is
    /// left untouched. Missing default configs are back-filled before saving.
    pub fn import_data(&mut self, json: &str) -> Result<AppData, TrackerError> {
        let mut data = parse_document(json)?;
        backfill_defaults(&mut data);
        self.save(&data)?;
        info!(
            configs = data.configs.len(),
            results = data.results.len(),
            version = %data.version,
            "imported document"
        );
        Ok(data)
    }

    // --- Theme ---

    pub fn theme(&self) -> Theme {
        theme::load_theme(&self.store)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), TrackerError> {
        theme::save_theme(&mut self.store, theme)?;
        Ok(())
    }
}
