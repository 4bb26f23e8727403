// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Gallery layout and preset image fetching
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. `AVATAR_PICKER_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use avatar_picker::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("{} columns", config.gallery.effective_columns());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
        }
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Tiles per row.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,

    /// Download preset images at startup.
    #[serde(
        default = "default_fetch_presets",
        skip_serializing_if = "Option::is_none"
    )]
    pub fetch_presets: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            fetch_presets: default_fetch_presets(),
        }
    }
}

impl GalleryConfig {
    /// Tiles per row, clamped to the supported range.
    pub fn effective_columns(&self) -> u16 {
        self.columns
            .unwrap_or(DEFAULT_GALLERY_COLUMNS)
            .clamp(MIN_GALLERY_COLUMNS, MAX_GALLERY_COLUMNS)
    }

    pub fn should_fetch_presets(&self) -> bool {
        self.fetch_presets.unwrap_or(DEFAULT_FETCH_PRESETS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_columns() -> Option<u16> {
    Some(DEFAULT_GALLERY_COLUMNS)
}

fn default_fetch_presets() -> Option<bool> {
    Some(DEFAULT_FETCH_PRESETS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns `(config, optional_warning_key)`. A missing file yields defaults
/// silently; an unreadable one yields defaults plus a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                columns: Some(4),
                fetch_presets: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = \"neon\"\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("").expect("empty config is valid");
        assert_eq!(config, Config::default());
        assert_eq!(config.gallery.effective_columns(), DEFAULT_GALLERY_COLUMNS);
        assert!(config.gallery.should_fetch_presets());
    }

    #[test]
    fn columns_are_clamped() {
        let wide = GalleryConfig {
            columns: Some(40),
            ..GalleryConfig::default()
        };
        assert_eq!(wide.effective_columns(), MAX_GALLERY_COLUMNS);

        let zero = GalleryConfig {
            columns: Some(0),
            ..GalleryConfig::default()
        };
        assert_eq!(zero.effective_columns(), MIN_GALLERY_COLUMNS);
    }
}
