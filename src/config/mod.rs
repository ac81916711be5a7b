// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[page]` - Geometry of the generated document page
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SNAPSHEET_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Geometry of the generated document page.
///
/// Every field is optional; absent fields fall back to the stock survey
/// sheet layout (1056x800 points with a 24 point padding).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageConfig {
    /// Page height in points.
    #[serde(default = "default_page_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Page width in points.
    #[serde(default = "default_page_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Uniform page padding in points.
    #[serde(
        default = "default_page_padding",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding: Option<u32>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            height: Some(DEFAULT_PAGE_HEIGHT),
            width: Some(DEFAULT_PAGE_WIDTH),
            padding: Some(DEFAULT_PAGE_PADDING),
        }
    }
}

impl PageConfig {
    /// Effective page height in points.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_PAGE_HEIGHT)
    }

    /// Effective page width in points.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width.unwrap_or(DEFAULT_PAGE_WIDTH)
    }

    /// Effective page padding in points.
    #[must_use]
    pub fn padding(&self) -> u32 {
        self.padding.unwrap_or(DEFAULT_PAGE_PADDING)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Page geometry for generated documents.
    #[serde(default)]
    pub page: PageConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_page_height() -> Option<u32> {
    Some(DEFAULT_PAGE_HEIGHT)
}

fn default_page_width() -> Option<u32> {
    Some(DEFAULT_PAGE_WIDTH)
}

fn default_page_padding() -> Option<u32> {
    Some(DEFAULT_PAGE_PADDING)
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

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
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

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return Err(crate::error::Error::Config(
            "could not determine config directory".to_string(),
        ));
    };
    save_to_path(config, &path)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_page_matches_survey_sheet() {
        let page = PageConfig::default();
        assert_eq!(page.height(), 800);
        assert_eq!(page.width(), 1056);
        assert_eq!(page.padding(), 24);
    }

    #[test]
    fn empty_page_section_falls_back_to_defaults() {
        let page = PageConfig {
            height: None,
            width: None,
            padding: None,
        };
        assert_eq!(page.height(), DEFAULT_PAGE_HEIGHT);
        assert_eq!(page.width(), DEFAULT_PAGE_WIDTH);
        assert_eq!(page.padding(), DEFAULT_PAGE_PADDING);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.general.theme_mode = ThemeMode::Dark;
        config.page.height = Some(1200);

        save_to_path(&config, &path).expect("save config");
        let loaded = load_from_path(&path).expect("load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.page.height(), 1200);
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("").expect("parse empty config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_returns_warning_on_bad_file() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("settings.toml"), "not [ valid toml").expect("write file");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning, Some("notification-config-load-error".to_string()));
    }
}
