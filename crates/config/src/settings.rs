// Tool settings
// Loaded from ~/.config/aufiles/config.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Upstream dump published alongside the archive.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/Hyperionicc/TheAmongUsFiles/refs/heads/main/TheAmongUsFiles%20(raw).txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// URL of the remote flat-text dump.
    #[serde(rename = "remote.dataUrl")]
    pub data_url: String,

    /// Path to the SQLite record database. Empty = default location.
    #[serde(rename = "storage.databasePath")]
    pub database_path: String,

    /// How long cached remote records stay fresh, in hours.
    #[serde(rename = "cache.ttlHours")]
    pub cache_ttl_hours: u32,

    /// Default page size for listings.
    #[serde(rename = "view.pageSize")]
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            database_path: String::new(),
            cache_ttl_hours: 48,
            page_size: 50,
        }
    }
}

impl Settings {
    /// Get the settings file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aufiles")
            .join("config.json")
    }

    /// Load settings from disk, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("warning: cannot parse {}: {e}", path.display());
                    eprintln!("warning: using default settings");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save current settings to disk.
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, json).map_err(|e| e.to_string())
    }

    /// Resolved database file: the configured path, or the default under
    /// the user data directory.
    pub fn database_file(&self) -> PathBuf {
        if self.database_path.is_empty() {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("aufiles")
                .join("records.db")
        } else {
            PathBuf::from(&self.database_path)
        }
    }

    /// Cache TTL in milliseconds.
    pub fn cache_ttl_ms(&self) -> i64 {
        i64::from(self.cache_ttl_hours) * 60 * 60 * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_archive_page() {
        let settings = Settings::default();
        assert_eq!(settings.cache_ttl_hours, 48);
        assert_eq!(settings.page_size, 50);
        assert_eq!(settings.cache_ttl_ms(), 48 * 60 * 60 * 1000);
        assert!(settings.data_url.starts_with("https://"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("missing.json"));
        assert_eq!(settings.page_size, Settings::default().page_size);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.cache_ttl_hours, 48);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"view.pageSize": 100}"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.page_size, 100);
        assert_eq!(settings.cache_ttl_hours, 48);
    }

    #[test]
    fn configured_database_path_wins() {
        let mut settings = Settings::default();
        settings.database_path = "/tmp/records.db".into();
        assert_eq!(settings.database_file(), PathBuf::from("/tmp/records.db"));
    }
}
