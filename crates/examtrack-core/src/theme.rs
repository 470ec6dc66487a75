//! Theme preference persistence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "examtrack-theme";

/// Display theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Read the saved theme. Anything other than exactly `light` or `dark`,
/// including a read failure, yields [`Theme::Light`].
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(saved)) => saved.parse().unwrap_or_default(),
        Ok(None) => Theme::default(),
        Err(e) => {
            warn!(error = %e, "failed to read theme preference");
            Theme::default()
        }
    }
}

/// Persist the theme as its literal name.
pub fn save_theme<S: KeyValueStore + ?Sized>(
    store: &mut S,
    theme: Theme,
) -> Result<(), StorageError> {
    store.set(THEME_KEY, &theme.to_string())
}
