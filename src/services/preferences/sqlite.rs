use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::PreferenceStore;
use crate::services::database::Database;

/// Preferences stored one row per key in the `preferences` table.
pub struct SqlitePreferences {
    db: Database,
}

impl SqlitePreferences {
    /// Opens (or creates) the database at `path` and ensures the schema.
    pub fn open(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .with_context(|| format!("database path is not valid UTF-8: {}", path.display()))?;
        Self::from_database(Database::new(path_str)?)
    }

    pub fn from_database(db: Database) -> Result<Self> {
        db.initialize_schema()?;
        Ok(Self { db })
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_database(Database::new(":memory:")?)
    }
}

impl PreferenceStore for SqlitePreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.db
            .connection()
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read preference {key}"))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT INTO preferences (key, value, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = CURRENT_TIMESTAMP",
                params![key, value],
            )
            .with_context(|| format!("Failed to write preference {key}"))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.db
            .connection()
            .execute("DELETE FROM preferences WHERE key = ?1", [key])
            .with_context(|| format!("Failed to delete preference {key}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_replaces_existing_value() {
        let mut prefs = SqlitePreferences::in_memory().unwrap();
        prefs.set("countdowns", "[]").unwrap();
        prefs.set("countdowns", "[1]").unwrap();

        assert_eq!(prefs.get("countdowns").unwrap().as_deref(), Some("[1]"));

        let rows: i64 = prefs
            .db
            .connection()
            .query_row("SELECT COUNT(*) FROM preferences", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_missing_key_is_none() {
        let prefs = SqlitePreferences::in_memory().unwrap();
        assert_eq!(prefs.get("countdowns").unwrap(), None);
        assert!(!prefs.get_bool("isPremium").unwrap());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("countdowns.db");
        {
            let mut prefs = SqlitePreferences::open(&path).unwrap();
            prefs.set_bool("isPremium", true).unwrap();
        }

        let prefs = SqlitePreferences::open(&path).unwrap();
        assert!(prefs.get_bool("isPremium").unwrap());
    }

    #[test]
    fn test_remove() {
        let mut prefs = SqlitePreferences::in_memory().unwrap();
        prefs.set("countdowns", "[]").unwrap();
        prefs.remove("countdowns").unwrap();
        assert_eq!(prefs.get("countdowns").unwrap(), None);
    }
}
