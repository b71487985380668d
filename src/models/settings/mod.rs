// Application configuration
// Loaded from config.toml in the platform config directory

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "config.toml";
const MIN_REFRESH_INTERVAL_MS: u64 = 100;
const MAX_REFRESH_INTERVAL_MS: u64 = 60_000;

/// Where the preference keys are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Json,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: StorageBackend,
    /// Overrides the platform data directory
    pub data_dir: Option<PathBuf>,
    pub refresh_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: None,
            refresh_interval_ms: 1000,
        }
    }
}

impl AppConfig {
    /// Loads the config from the platform config directory, falling back to
    /// defaults when the file is absent or unreadable.
    pub fn load() -> Self {
        let Some(dirs) = project_dirs() else {
            log::warn!("No home directory found, using default configuration");
            return Self::default();
        };

        let path = dirs.config_dir().join(CONFIG_FILE_NAME);
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring configuration: {err:#}");
                Self::default()
            }
        }
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&data)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(
            self.refresh_interval_ms
                .clamp(MIN_REFRESH_INTERVAL_MS, MAX_REFRESH_INTERVAL_MS),
        )
    }

    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// File backing the preference store, or `None` for the memory backend.
    pub fn preferences_path(&self) -> Option<PathBuf> {
        match self.backend {
            StorageBackend::Sqlite => Some(self.data_dir().join("countdowns.db")),
            StorageBackend::Json => Some(self.data_dir().join("preferences.json")),
            StorageBackend::Memory => None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Ken24T", "Countdowns")
}
