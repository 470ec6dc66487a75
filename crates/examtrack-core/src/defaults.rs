//! Built-in scoring configs and other fixed application data.

use crate::model::{AppData, ExamConfig};

/// Schema version written into fresh documents.
pub const APP_VERSION: &str = "0.3.1";

/// Ids of the built-in configs, in the order they are seeded.
pub const DEFAULT_CONFIG_IDS: [&str; 4] = ["yks", "kpss", "ales", "dgs"];

/// Suggested subject labels for exam results.
pub const SUBJECTS: &[&str] = &[
    "Matematik",
    "Geometri",
    "Fizik",
    "Kimya",
    "Biyoloji",
    "Türkçe",
    "Edebiyat",
    "Tarih",
    "Coğrafya",
    "Felsefe",
    "Din Kültürü",
    "İngilizce",
    "Diğer",
];

fn builtin(id: &str, name: &str) -> ExamConfig {
    ExamConfig {
        id: id.to_string(),
        name: name.to_string(),
        correct_multiplier: 1.0,
        wrong_multiplier: -0.25,
        blank_multiplier: 0.0,
        total_questions: None,
        is_default: true,
    }
}

/// The built-in configs. Every stored document contains all of them.
pub fn default_configs() -> Vec<ExamConfig> {
    vec![
        builtin("yks", "YKS (TYT/AYT)"),
        builtin("kpss", "KPSS"),
        builtin("ales", "ALES"),
        builtin("dgs", "DGS"),
    ]
}

/// Returns `true` if `id` names a built-in config.
pub fn is_default_id(id: &str) -> bool {
    DEFAULT_CONFIG_IDS.contains(&id)
}

/// A fresh document: default configs, no results, current version.
pub fn default_document() -> AppData {
    AppData {
        configs: default_configs(),
        results: Vec::new(),
        version: APP_VERSION.to_string(),
    }
}

/// Prepend any missing default config to `data.configs`.
///
/// Missing defaults keep their built-in order and come before existing
/// configs. Returns the number of configs added.
pub fn backfill_defaults(data: &mut AppData) -> usize {
    let missing: Vec<ExamConfig> = default_configs()
        .into_iter()
        .filter(|dc| !data.configs.iter().any(|c| c.id == dc.id))
        .collect();

    let added = missing.len();
    if added > 0 {
        data.configs.splice(0..0, missing);
    }
    added
}
