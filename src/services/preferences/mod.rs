//! Key-value preference storage.
//!
//! The countdown store only needs to read and write a couple of named text
//! blobs, so persistence sits behind the small [`PreferenceStore`] trait with
//! file, SQLite and in-memory implementations.

mod json_file;
mod memory;
mod sqlite;

use std::fs;

use anyhow::{bail, Context, Result};

use crate::models::settings::{AppConfig, StorageBackend};

pub use json_file::JsonFilePreferences;
pub use memory::MemoryPreferences;
pub use sqlite::SqlitePreferences;

/// A persistent map from preference keys to text values.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Returns the value stored under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;

    /// Reads a boolean preference; a missing key reads as `false`.
    fn get_bool(&self, key: &str) -> Result<bool> {
        match self.get(key)? {
            None => Ok(false),
            Some(value) => match value.trim() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => bail!("preference {key} is not a boolean: {other:?}"),
            },
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.set(key, if value { "true" } else { "false" })
    }
}

/// Opens the preference store selected by the configuration.
pub fn open_preferences(config: &AppConfig) -> Result<Box<dyn PreferenceStore>> {
    let path = config.preferences_path();
    if let Some(parent) = path.as_deref().and_then(|p| p.parent()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let store: Box<dyn PreferenceStore> = match (config.backend, path) {
        (StorageBackend::Sqlite, Some(path)) => Box::new(SqlitePreferences::open(&path)?),
        (StorageBackend::Json, Some(path)) => Box::new(JsonFilePreferences::open(&path)?),
        _ => Box::new(MemoryPreferences::new()),
    };

    log::info!("Using {:?} preference backend", config.backend);
    Ok(store)
}
