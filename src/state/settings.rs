use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::state::resources::Language;

/// Per-user preferences persisted under the OS config dir. Persistence is
/// best-effort: a missing or unreadable file yields the defaults, a failed
/// write only logs a warning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub dark_theme: bool,
    #[serde(default)]
    pub language: Language,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            dark_theme: false,
            language: Language::En,
        }
    }
}

impl UserSettings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vitaline").join("settings.json"))
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path).unwrap_or_default(),
            None => Self::default(),
        }
    }

    fn load_from(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings: UserSettings = serde_json::from_str(&json)?;
        Ok(settings)
    }

    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Err(err) = self.save_to(&path) {
            eprintln!("[SETTINGS WARN] Failed to save {}: {}", path.display(), err);
        }
    }

    fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = UserSettings {
            dark_theme: true,
            language: Language::De,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(UserSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_is_an_error_load_defaults_instead() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert!(UserSettings::load_from(&path).is_err());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(UserSettings::load_from(&path).is_err());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "language": "de" }"#).unwrap();
        let settings = UserSettings::load_from(&path).unwrap();
        assert_eq!(settings.language, Language::De);
        assert!(!settings.dark_theme);
    }
}
