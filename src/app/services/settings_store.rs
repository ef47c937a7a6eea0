use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::settings::AppSettings;
use crate::app::infrastructure::error::{AppError, Result};

/// Durable home of [`AppSettings`]: a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config location.
    pub fn at_default_location() -> Self {
        Self::new(Self::get_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from disk. A missing or unreadable file yields defaults;
    /// a corrupt file is logged and yields defaults.
    pub fn load(&self) -> AppSettings {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str::<AppSettings>(&contents) {
                Ok(settings) => {
                    tracing::debug!(path = %self.path.display(), "loaded settings");
                    settings.normalized()
                }
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        "failed to parse settings: {}. Using defaults.",
                        e
                    );
                    AppSettings::default()
                }
            },
            Err(e) => {
                tracing::debug!(
                    path = %self.path.display(),
                    "no settings file ({}), using defaults",
                    e
                );
                AppSettings::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, settings: &AppSettings) -> Result<()> {
        if self.path.is_dir() {
            return Err(AppError::SettingsPath(self.path.clone()));
        }

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        tracing::info!(path = %self.path.display(), "settings saved");

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("multipad");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.load(), AppSettings::default());
        // Loading never creates the file.
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ this is not json").unwrap();
        assert_eq!(SettingsStore::new(&path).load(), AppSettings::default());
    }

    #[test]
    fn test_wrong_shape_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"font_size": "huge"}"#).unwrap();
        assert_eq!(SettingsStore::new(&path).load(), AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("nested").join("settings.json"));
        let mut settings = AppSettings {
            font_size: 18,
            font_family: "Courier".to_string(),
            bg_color: "#1e1e1e".to_string(),
            autosave_enabled: false,
            ..Default::default()
        };
        settings.recent_files.touch("/tmp/a.txt");

        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_saved_file_uses_flat_keys() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        store.save(&AppSettings::default()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        for key in [
            "font_size",
            "font_family",
            "font_color",
            "bg_color",
            "autosave_enabled",
            "autosave_interval",
            "recent_files",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_load_clamps_font_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"font_size": 2}"#).unwrap();
        assert_eq!(SettingsStore::new(&path).load().font_size, 4);
    }

    #[test]
    fn test_save_to_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path());
        let err = store.save(&AppSettings::default()).unwrap_err();
        assert!(matches!(err, AppError::SettingsPath(_)));
    }
}
