// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[grid]` - Circle size bounds, gap ratio, per-cell style overrides
//! - `[interaction]` - Linger duration and per-cell linger overrides
//! - `[overlay]` - Reveal overlay caption
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `ICED_DOTS_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_dots::config;
//!
//! // Load existing configuration (returns tuple with optional warning key)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

// Re-export all default constants
pub use defaults::*;

use crate::app::paths;
use crate::domain::grid::{CellId, GapRatio, LingerDuration, SizeBounds};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
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

/// Circle grid layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    /// Minimum circle size in logical pixels.
    #[serde(default = "default_min_size", skip_serializing_if = "Option::is_none")]
    pub min_size: Option<f32>,

    /// Maximum circle size in logical pixels.
    #[serde(default = "default_max_size", skip_serializing_if = "Option::is_none")]
    pub max_size: Option<f32>,

    /// Minimum circle size when the window is at or below the compact breakpoint.
    #[serde(
        default = "default_compact_min_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub compact_min_size: Option<f32>,

    /// Maximum circle size when the window is at or below the compact breakpoint.
    #[serde(
        default = "default_compact_max_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub compact_max_size: Option<f32>,

    /// Gap between circles as a fraction of the circle size.
    #[serde(default = "default_gap_ratio", skip_serializing_if = "Option::is_none")]
    pub gap_ratio: Option<f32>,

    /// Per-cell fill color overrides, keyed by cell token (`c5 = "#ff6b35"`).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub cell_styles: HashMap<CellId, String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_size: default_min_size(),
            max_size: default_max_size(),
            compact_min_size: default_compact_min_size(),
            compact_max_size: default_compact_max_size(),
            gap_ratio: default_gap_ratio(),
            cell_styles: HashMap::new(),
        }
    }
}

impl GridConfig {
    /// Returns the sanitized circle size bounds for the given viewport mode.
    #[must_use]
    pub fn bounds(&self, compact: bool) -> SizeBounds {
        if compact {
            SizeBounds::new(
                self.compact_min_size
                    .unwrap_or(DEFAULT_COMPACT_MIN_CIRCLE_SIZE),
                self.compact_max_size
                    .unwrap_or(DEFAULT_COMPACT_MAX_CIRCLE_SIZE),
            )
        } else {
            SizeBounds::new(
                self.min_size.unwrap_or(DEFAULT_MIN_CIRCLE_SIZE),
                self.max_size.unwrap_or(DEFAULT_MAX_CIRCLE_SIZE),
            )
        }
    }

    /// Returns the sanitized gap ratio.
    #[must_use]
    pub fn gap(&self) -> GapRatio {
        GapRatio::new(self.gap_ratio.unwrap_or(DEFAULT_GAP_RATIO))
    }
}

/// Pointer interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionConfig {
    /// How long a cell stays highlighted after the pointer leaves it (ms).
    #[serde(default = "default_linger_ms", skip_serializing_if = "Option::is_none")]
    pub linger_ms: Option<u64>,

    /// Per-cell linger overrides in milliseconds, keyed by cell token.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub linger_overrides: HashMap<CellId, u64>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            linger_ms: default_linger_ms(),
            linger_overrides: HashMap::new(),
        }
    }
}

impl InteractionConfig {
    /// Returns the clamped default linger duration.
    #[must_use]
    pub fn default_linger(&self) -> LingerDuration {
        LingerDuration::from_millis(self.linger_ms.unwrap_or(DEFAULT_LINGER_MS))
    }

    /// Returns the clamped per-cell linger overrides.
    #[must_use]
    pub fn overrides(&self) -> HashMap<CellId, LingerDuration> {
        self.linger_overrides
            .iter()
            .map(|(cell, ms)| (*cell, LingerDuration::from_millis(*ms)))
            .collect()
    }
}

/// Reveal overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Caption revealed letter-by-letter when the sentinel circle is tapped.
    #[serde(default = "default_caption", skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            caption: default_caption(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Circle grid layout settings.
    #[serde(default)]
    pub grid: GridConfig,

    /// Pointer interaction settings.
    #[serde(default)]
    pub interaction: InteractionConfig,

    /// Reveal overlay settings.
    #[serde(default)]
    pub overlay: OverlayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_min_size() -> Option<f32> {
    Some(DEFAULT_MIN_CIRCLE_SIZE)
}

fn default_max_size() -> Option<f32> {
    Some(DEFAULT_MAX_CIRCLE_SIZE)
}

fn default_compact_min_size() -> Option<f32> {
    Some(DEFAULT_COMPACT_MIN_CIRCLE_SIZE)
}

fn default_compact_max_size() -> Option<f32> {
    Some(DEFAULT_COMPACT_MAX_CIRCLE_SIZE)
}

fn default_gap_ratio() -> Option<f32> {
    Some(DEFAULT_GAP_RATIO)
}

fn default_linger_ms() -> Option<u64> {
    Some(DEFAULT_LINGER_MS)
}

fn default_caption() -> Option<String> {
    Some(DEFAULT_CAPTION.to_string())
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
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning key). If loading fails, the
/// default config is returned together with a warning explaining that the
/// existing file could not be read.
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
                    return (Config::default(), Some("warning-config-invalid".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut cell_styles = HashMap::new();
        cell_styles.insert("c5".parse::<CellId>().unwrap(), "#ff6b35".to_string());
        let mut linger_overrides = HashMap::new();
        linger_overrides.insert("c5".parse::<CellId>().unwrap(), 1200);

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            grid: GridConfig {
                min_size: Some(24.0),
                max_size: Some(48.0),
                compact_min_size: Some(12.0),
                compact_max_size: Some(24.0),
                gap_ratio: Some(0.25),
                cell_styles,
            },
            interaction: InteractionConfig {
                linger_ms: Some(600),
                linger_overrides,
            },
            overlay: OverlayConfig {
                caption: Some("Hi!".to_string()),
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
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_degrades_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[grid]\nmin_size = \"wide\"").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("warning-config-invalid"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn invalid_cell_token_in_overrides_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[interaction.linger_overrides]\nnot-a-cell = 500",
        )
        .expect("failed to write");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn grid_bounds_switch_on_compact_mode() {
        let config = GridConfig::default();

        let regular = config.bounds(false);
        let compact = config.bounds(true);

        assert_eq!(regular.max(), DEFAULT_MAX_CIRCLE_SIZE);
        assert_eq!(compact.max(), DEFAULT_COMPACT_MAX_CIRCLE_SIZE);
        assert!(compact.max() < regular.max());
    }

    #[test]
    fn interaction_overrides_are_clamped() {
        let mut linger_overrides = HashMap::new();
        linger_overrides.insert("c3".parse::<CellId>().unwrap(), 120_000);
        let config = InteractionConfig {
            linger_ms: Some(600),
            linger_overrides,
        };

        let overrides = config.overrides();
        let cell = "c3".parse::<CellId>().unwrap();

        assert_eq!(
            overrides.get(&cell).unwrap().as_millis(),
            crate::domain::grid::newtypes::linger_bounds::MAX_MS
        );
    }
}
