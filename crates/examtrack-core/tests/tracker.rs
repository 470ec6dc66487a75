//! Integration tests for the tracker's data access layer.

use chrono::{DateTime, Utc};

use examtrack_core::calendar::{day_summaries, streak};
use examtrack_core::defaults::{default_configs, DEFAULT_CONFIG_IDS};
use examtrack_core::theme::Theme;
use examtrack_core::tracker::DATA_KEY;
use examtrack_core::{
    ExamTracker, FileStore, ImportError, KeyValueStore, MemoryStore, NewConfig, NewResult,
    ResultUpdate, StorageError, TrackerError,
};

/// A store that can be told to fail reads or writes.
#[derive(Default)]
struct FailingStore {
    inner: MemoryStore,
    fail_get: bool,
    fail_set: bool,
}

impl FailingStore {
    fn io_error(key: &str) -> StorageError {
        StorageError::Io {
            key: key.to_string(),
            path: "/unavailable".into(),
            source: std::io::Error::other("device unavailable"),
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_get {
            return Err(Self::io_error(key));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_set {
            return Err(Self::io_error(key));
        }
        self.inner.set(key, value)
    }
}

fn tracker() -> ExamTracker<MemoryStore> {
    ExamTracker::new(MemoryStore::new())
}

fn new_config(name: &str) -> NewConfig {
    NewConfig {
        name: name.into(),
        correct_multiplier: 1.0,
        wrong_multiplier: -0.25,
        blank_multiplier: 0.0,
        total_questions: Some(120),
        is_default: false,
    }
}

fn new_result(exam: &str, correct: u32, wrong: u32, blank: u32, net: f64) -> NewResult {
    NewResult {
        config_id: "yks".into(),
        config_name: "YKS (TYT/AYT)".into(),
        exam_name: exam.into(),
        subject: "Matematik".into(),
        correct,
        wrong,
        blank,
        net_score: net,
    }
}

fn config_ids<S: KeyValueStore>(t: &ExamTracker<S>) -> Vec<String> {
    t.configs().into_iter().map(|c| c.id).collect()
}

#[test]
fn empty_store_loads_defaults() {
    let t = tracker();
    let data = t.load();
    assert_eq!(data.configs, default_configs());
    assert!(data.results.is_empty());
    assert_eq!(data.version, "0.3.1");
}

#[test]
fn corrupt_document_loads_defaults() {
    let t = ExamTracker::new(MemoryStore::new().with_entry(DATA_KEY, "{not json"));
    let data = t.load();
    assert_eq!(data.configs.len(), DEFAULT_CONFIG_IDS.len());
    assert!(data.results.is_empty());
}

#[test]
fn load_backfills_missing_defaults_before_user_configs() {
    let stored = r#"{
        "configs": [
            {"id": "kpss", "name": "KPSS", "correctMultiplier": 1, "wrongMultiplier": -0.25, "blankMultiplier": 0, "isDefault": true},
            {"id": "mine", "name": "Mine", "correctMultiplier": 2, "wrongMultiplier": -0.5, "blankMultiplier": 0}
        ],
        "results": [],
        "version": "0.2.0"
    }"#;
    let t = ExamTracker::new(MemoryStore::new().with_entry(DATA_KEY, stored));
    assert_eq!(config_ids(&t), vec!["yks", "ales", "dgs", "kpss", "mine"]);
    assert_eq!(t.load().version, "0.2.0");
}

#[test]
fn add_and_delete_user_config() {
    let mut t = tracker();
    let added = t.add_config(new_config("Custom")).unwrap();
    assert!(!added.id.is_empty());
    assert_eq!(config_ids(&t).last(), Some(&added.id));
    assert_eq!(t.config(&added.id).unwrap().name, "Custom");

    t.delete_config(&added.id).unwrap();
    assert!(t.config(&added.id).is_none());
    assert_eq!(t.configs().len(), DEFAULT_CONFIG_IDS.len());
}

#[test]
fn deleting_default_config_fails_without_writing() {
    let mut t = tracker();
    t.add_config(new_config("Custom")).unwrap();
    let before = t.store().get(DATA_KEY).unwrap();

    for id in DEFAULT_CONFIG_IDS {
        let err = t.delete_config(id).unwrap_err();
        assert!(matches!(err, TrackerError::ProtectedConfig(ref got) if got == id));
    }
    assert_eq!(t.store().get(DATA_KEY).unwrap(), before);
}

#[test]
fn deleting_unknown_config_fails() {
    let mut t = tracker();
    let err = t.delete_config("nope").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(t.store().get(DATA_KEY).unwrap(), None);
}

#[test]
fn add_result_prepends_with_fresh_id_and_timestamp() {
    let mut t = tracker();
    let first = t.add_result(new_result("Deneme 1", 30, 8, 2, 28.0)).unwrap();
    let before = Utc::now();
    let second = t.add_result(new_result("Deneme 2", 35, 4, 1, 34.0)).unwrap();

    let results = t.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], second);
    assert_eq!(results[1], first);
    assert_ne!(first.id, second.id);

    let stamped: DateTime<Utc> = second.date.parse().unwrap();
    assert!((stamped - before).num_seconds().abs() <= 1);
}

#[test]
fn record_result_scores_with_config() {
    let mut t = tracker();
    let r = t.record_result("yks", "TYT", "Fizik", 80, 20, 20).unwrap();
    assert_eq!(r.net_score, 75.0);
    assert_eq!(r.config_name, "YKS (TYT/AYT)");

    let err = t.record_result("missing", "TYT", "Fizik", 1, 0, 0).unwrap_err();
    assert!(matches!(err, TrackerError::ConfigNotFound(_)));
    assert_eq!(t.results().len(), 1);
}

#[test]
fn update_result_merges_fields_and_keeps_identity() {
    let mut t = tracker();
    let original = t.add_result(new_result("Deneme", 10, 0, 0, 10.0)).unwrap();

    let updated = t
        .update_result(
            &original.id,
            ResultUpdate {
                exam_name: Some("Deneme (fixed)".into()),
                wrong: Some(4),
                net_score: Some(9.0),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.date, original.date);
    assert_eq!(updated.exam_name, "Deneme (fixed)");
    assert_eq!(updated.wrong, 4);
    assert_eq!(updated.correct, 10);
    assert_eq!(t.results()[0], updated);
}

#[test]
fn update_unknown_result_leaves_document_unchanged() {
    let mut t = tracker();
    t.add_result(new_result("Deneme", 10, 0, 0, 10.0)).unwrap();
    let before = t.store().get(DATA_KEY).unwrap();

    let err = t
        .update_result(
            "missing",
            ResultUpdate {
                correct: Some(1),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, TrackerError::ResultNotFound(_)));
    assert_eq!(t.store().get(DATA_KEY).unwrap(), before);
}

#[test]
fn delete_and_clear_results() {
    let mut t = tracker();
    let a = t.add_result(new_result("A", 1, 0, 0, 1.0)).unwrap();
    t.add_result(new_result("B", 2, 0, 0, 2.0)).unwrap();

    assert!(t.delete_result(&a.id).unwrap());
    assert!(!t.delete_result(&a.id).unwrap());
    assert_eq!(t.results().len(), 1);

    t.clear_results().unwrap();
    assert!(t.results().is_empty());
    assert_eq!(t.configs().len(), DEFAULT_CONFIG_IDS.len());
}

#[test]
fn export_import_roundtrip() {
    let mut t = tracker();
    t.add_config(new_config("Custom")).unwrap();
    t.record_result("yks", "TYT", "Kimya", 20, 4, 1).unwrap();
    t.record_result("kpss", "GY", "Tarih", 40, 10, 10).unwrap();

    let exported = t.export_data();
    let text = serde_json::to_string(&exported).unwrap();

    let mut other = tracker();
    let imported = other.import_data(&text).unwrap();
    assert_eq!(imported, exported);
    assert_eq!(other.export_data(), exported);

    // Importing the same text again is a no-op.
    other.import_data(&text).unwrap();
    assert_eq!(other.export_data(), exported);
}

#[test]
fn export_results_matches_result_list() {
    let mut t = tracker();
    t.record_result("ales", "Sayısal", "Matematik", 40, 5, 5).unwrap();
    assert_eq!(t.export_results(), t.results());
}

#[test]
fn import_without_version_is_rejected() {
    let mut t = tracker();
    t.record_result("yks", "TYT", "Kimya", 20, 4, 1).unwrap();
    let before = t.store().get(DATA_KEY).unwrap();

    let err = t.import_data(r#"{"configs": [], "results": []}"#).unwrap_err();
    assert!(matches!(
        err,
        TrackerError::Import(ImportError::MissingField("version"))
    ));
    assert_eq!(t.store().get(DATA_KEY).unwrap(), before);
}

#[test]
fn import_invalid_json_is_rejected() {
    let mut t = tracker();
    let err = t.import_data("{{{").unwrap_err();
    assert!(matches!(err, TrackerError::Import(ImportError::InvalidJson(_))));
    assert_eq!(t.store().get(DATA_KEY).unwrap(), None);
}

#[test]
fn import_backfills_defaults() {
    let mut t = tracker();
    let data = t
        .import_data(r#"{"configs": [], "results": [], "version": "0.3.1"}"#)
        .unwrap();
    let ids: Vec<&str> = data.configs.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, DEFAULT_CONFIG_IDS);
    assert_eq!(config_ids(&t), DEFAULT_CONFIG_IDS);
}

#[test]
fn todays_results_start_a_streak() {
    let mut t = tracker();
    t.record_result("yks", "TYT", "Kimya", 20, 4, 1).unwrap();
    t.record_result("yks", "AYT", "Fizik", 10, 2, 0).unwrap();

    let summaries = day_summaries(&t.results());
    assert_eq!(summaries.len(), 1);
    let day = summaries.iter().next().unwrap();
    assert_eq!(day.exam_count, 2);
    assert_eq!(day.total_questions, 37);
    assert_eq!(day.net_score, 28.5);

    assert_eq!(day.date, chrono::Local::now().date_naive().to_string());
    assert_eq!(streak(&summaries), 1);
}

#[test]
fn theme_is_stored_separately() {
    let mut t = tracker();
    assert_eq!(t.theme(), Theme::Light);
    t.set_theme(Theme::Dark).unwrap();
    assert_eq!(t.theme(), Theme::Dark);
    assert_eq!(t.store().get(DATA_KEY).unwrap(), None);
}

#[test]
fn file_store_persists_across_trackers() {
    let dir = tempfile::tempdir().unwrap();

    let mut t = ExamTracker::new(FileStore::new(dir.path()));
    let added = t.record_result("dgs", "DGS", "Matematik", 50, 10, 0).unwrap();
    drop(t);

    let reopened = ExamTracker::new(FileStore::new(dir.path()));
    assert_eq!(reopened.results(), vec![added]);
}

#[test]
fn unreadable_store_loads_defaults() {
    let stored = r#"{"configs": [], "results": [], "version": "0.1.0"}"#;
    let store = FailingStore {
        inner: MemoryStore::new().with_entry(DATA_KEY, stored),
        fail_get: true,
        ..Default::default()
    };
    let t = ExamTracker::new(store);

    let data = t.load();
    assert_eq!(data.configs, default_configs());
    assert!(data.results.is_empty());
}

#[test]
fn failed_writes_surface_and_apply_nothing() {
    let mut seeded = tracker();
    let kept = seeded.add_result(new_result("Kept", 10, 0, 0, 10.0)).unwrap();
    let custom = seeded.add_config(new_config("Custom")).unwrap();
    let stored = seeded.store().get(DATA_KEY).unwrap().unwrap();

    let mut t = ExamTracker::new(FailingStore {
        inner: MemoryStore::new().with_entry(DATA_KEY, &stored),
        fail_set: true,
        ..Default::default()
    });

    let err = t.add_result(new_result("Lost", 1, 0, 0, 1.0)).unwrap_err();
    assert!(matches!(err, TrackerError::Storage(_)), "got {err:?}");

    let err = t.delete_config(&custom.id).unwrap_err();
    assert!(matches!(err, TrackerError::Storage(_)), "got {err:?}");

    let import = r#"{"configs": [], "results": [], "version": "9.9.9"}"#;
    let err = t.import_data(import).unwrap_err();
    assert!(matches!(err, TrackerError::Storage(_)), "got {err:?}");

    assert_eq!(t.results(), vec![kept]);
    assert!(t.config(&custom.id).is_some());
    assert_eq!(t.store().get(DATA_KEY).unwrap(), Some(stored));
}
