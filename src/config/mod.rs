// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Logging filter
//! - `[carousel]` - Strip layout and swipe behavior
//! - `[display]` - Image ordering and responsive breakpoints
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.carousel.swipe_threshold = Some(45.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::carousel::{Breakpoints, CarouselSettings, GestureReset, LayoutMetrics};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
}

impl std::str::FromStr for SortOrder {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "alphabetical" => Ok(SortOrder::Alphabetical),
            "modified-date" | "modified" => Ok(SortOrder::ModifiedDate),
            other => Err(Error::Config(format!("invalid sort order: {}", other))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter", skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

/// Carousel strip and gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Height images are scaled to on wide viewports.
    #[serde(default = "default_display_height", skip_serializing_if = "Option::is_none")]
    pub display_height: Option<f32>,

    /// Spacing after each image of the strip.
    #[serde(default = "default_image_gap", skip_serializing_if = "Option::is_none")]
    pub image_gap: Option<f32>,

    /// Minimum horizontal travel of a swipe.
    #[serde(default = "default_swipe_threshold", skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,

    /// When a recorded touch start is discarded.
    #[serde(default)]
    pub gesture_reset: GestureReset,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            display_height: default_display_height(),
            image_gap: default_image_gap(),
            swipe_threshold: default_swipe_threshold(),
            gesture_reset: GestureReset::default(),
        }
    }
}

/// Image ordering and responsive layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Image file sorting order in a directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    #[serde(default = "default_mobile_max_width", skip_serializing_if = "Option::is_none")]
    pub mobile_max_width: Option<f32>,

    #[serde(default = "default_tablet_max_width", skip_serializing_if = "Option::is_none")]
    pub tablet_max_width: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::default()),
            mobile_max_width: default_mobile_max_width(),
            tablet_max_width: default_tablet_max_width(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Builds carousel settings, clamping every value into its supported range.
    ///
    /// TOML accepts `nan` and `inf`; such values fall back to the defaults.
    pub fn carousel_settings(&self) -> CarouselSettings {
        let display_height = self
            .carousel
            .display_height
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_DISPLAY_HEIGHT)
            .clamp(MIN_DISPLAY_HEIGHT, MAX_DISPLAY_HEIGHT);
        let gap = self
            .carousel
            .image_gap
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_IMAGE_GAP)
            .clamp(MIN_IMAGE_GAP, MAX_IMAGE_GAP);
        let swipe_threshold = self
            .carousel
            .swipe_threshold
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD)
            .clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD);

        let mobile_max_width = self
            .display
            .mobile_max_width
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_MOBILE_MAX_WIDTH)
            .max(0.0);
        // A tablet range narrower than the phone range would make tablets unreachable.
        let tablet_max_width = self
            .display
            .tablet_max_width
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_TABLET_MAX_WIDTH)
            .max(mobile_max_width);

        CarouselSettings {
            metrics: LayoutMetrics {
                display_height,
                gap,
            },
            swipe_threshold,
            gesture_reset: self.carousel.gesture_reset,
            breakpoints: Breakpoints {
                mobile_max_width,
                tablet_max_width,
            },
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        self.display.sort_order.unwrap_or_default()
    }

    pub fn log_filter(&self) -> &str {
        self.general
            .log_filter
            .as_deref()
            .unwrap_or(DEFAULT_LOG_FILTER)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_log_filter() -> Option<String> {
    Some(DEFAULT_LOG_FILTER.to_string())
}

fn default_display_height() -> Option<f32> {
    Some(DEFAULT_DISPLAY_HEIGHT)
}

fn default_image_gap() -> Option<f32> {
    Some(DEFAULT_IMAGE_GAP)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_mobile_max_width() -> Option<f32> {
    Some(DEFAULT_MOBILE_MAX_WIDTH)
}

fn default_tablet_max_width() -> Option<f32> {
    Some(DEFAULT_TABLET_MAX_WIDTH)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
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
        let config = Config {
            general: GeneralConfig {
                log_filter: Some("iced_carousel=debug".to_string()),
            },
            carousel: CarouselConfig {
                display_height: Some(480.0),
                image_gap: Some(8.0),
                swipe_threshold: Some(45.0),
                gesture_reset: GestureReset::TapOnly,
            },
            display: DisplayConfig {
                sort_order: Some(SortOrder::ModifiedDate),
                mobile_max_width: Some(599.0),
                tablet_max_width: Some(999.0),
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

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[carousel\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_values_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[carousel]\nswipe_threshold = 50.0\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.carousel.swipe_threshold, Some(50.0));
        assert_eq!(loaded.carousel.display_height, Some(DEFAULT_DISPLAY_HEIGHT));
        assert_eq!(loaded.carousel.gesture_reset, GestureReset::Always);
        assert_eq!(loaded.display.mobile_max_width, Some(DEFAULT_MOBILE_MAX_WIDTH));
    }

    #[test]
    fn gesture_reset_parses_kebab_case() {
        let config: Config =
            toml::from_str("[carousel]\ngesture_reset = \"tap-only\"\n").expect("valid toml");
        assert_eq!(config.carousel.gesture_reset, GestureReset::TapOnly);
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn carousel_settings_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.carousel.display_height = Some(1.0);
        config.carousel.image_gap = Some(-5.0);
        config.carousel.swipe_threshold = Some(10_000.0);
        config.display.mobile_max_width = Some(900.0);
        config.display.tablet_max_width = Some(500.0);

        let settings = config.carousel_settings();
        assert_eq!(settings.metrics.display_height, MIN_DISPLAY_HEIGHT);
        assert_eq!(settings.metrics.gap, MIN_IMAGE_GAP);
        assert_eq!(settings.swipe_threshold, MAX_SWIPE_THRESHOLD);
        assert_eq!(settings.breakpoints.tablet_max_width, 900.0);
    }

    #[test]
    fn carousel_settings_replace_non_finite_values_with_defaults() {
        let config: Config = toml::from_str(
            "[carousel]\ndisplay_height = nan\nimage_gap = inf\nswipe_threshold = nan\n\n\
             [display]\nmobile_max_width = -inf\ntablet_max_width = nan\n",
        )
        .expect("valid toml");

        let settings = config.carousel_settings();
        assert_eq!(settings.metrics.display_height, DEFAULT_DISPLAY_HEIGHT);
        assert_eq!(settings.metrics.gap, DEFAULT_IMAGE_GAP);
        assert_eq!(settings.swipe_threshold, DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(settings.breakpoints.mobile_max_width, DEFAULT_MOBILE_MAX_WIDTH);
        assert_eq!(settings.breakpoints.tablet_max_width, DEFAULT_TABLET_MAX_WIDTH);
    }

    #[test]
    fn default_config_matches_default_carousel_settings() {
        assert_eq!(Config::default().carousel_settings(), CarouselSettings::default());
    }

    #[test]
    fn sort_order_parses_cli_values() {
        assert_eq!("alphabetical".parse::<SortOrder>().unwrap(), SortOrder::Alphabetical);
        assert_eq!("Modified-Date".parse::<SortOrder>().unwrap(), SortOrder::ModifiedDate);
        assert!("size".parse::<SortOrder>().is_err());
    }
}
