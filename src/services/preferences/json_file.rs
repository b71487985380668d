use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::PreferenceStore;

/// Preferences kept in a single JSON object file. The whole file is
/// rewritten on every change, through a temporary file renamed over the
/// target.
#[derive(Debug)]
pub struct JsonFilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePreferences {
    /// Opens the file at `path`. A missing file starts empty. An unparseable
    /// file is moved aside to `*.json.bak` and the store starts empty.
    pub fn open(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to read preferences from {}", path.display()))?;
            match serde_json::from_str(&data) {
                Ok(values) => values,
                Err(err) => {
                    let backup_path = path.with_extension("json.bak");
                    log::warn!(
                        "Unreadable preferences at {} ({}), moving them to {}",
                        path.display(),
                        err,
                        backup_path.display()
                    );
                    fs::rename(path, &backup_path).with_context(|| {
                        format!("failed to move aside {}", path.display())
                    })?;
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = serde_json::to_string_pretty(&self.values)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, data)
            .with_context(|| format!("failed to write preferences to {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }

    /// Applies `change` and flushes, restoring `key` if the write fails.
    fn write_through(
        &mut self,
        key: &str,
        change: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> Result<()> {
        let previous = self.values.get(key).cloned();
        change(&mut self.values);
        if let Err(err) = self.flush() {
            // Keep memory in step with what is on disk
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.write_through(key, |values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.values.contains_key(key) {
            return Ok(());
        }
        self.write_through(key, |values| {
            values.remove(key);
        })
    }
}
