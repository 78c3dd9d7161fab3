// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from an optional
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[search]` - Default search term, media type and API endpoint
//! - `[slideshow]` - Random replacement interval
//! - `[network]` - Request timeouts and user agent
//!
//! Every field is optional; a missing file yields [`Config::default`].
//! The application only reads this file. [`save_to_path`] exists so tools
//! and tests can produce one.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ITUNES_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use itunes_gallery::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("slideshow every {:?}", config.slideshow_interval());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::search::MediaType;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Search form defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Term placed in the search field at startup.
    #[serde(default = "default_term", skip_serializing_if = "Option::is_none")]
    pub default_term: Option<String>,

    /// Media type selected at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_media: Option<MediaType>,

    /// Search API endpoint. Only useful for mirrors and tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_term: default_term(),
            default_media: Some(MediaType::default()),
            endpoint: None,
        }
    }
}

/// Slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Seconds between two random replacements.
    #[serde(
        default = "default_interval_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_secs: Option<u64>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Timeout for the search request (seconds).
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,

    /// Timeout for each thumbnail download (seconds).
    #[serde(
        default = "default_image_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_timeout_secs: Option<u64>,

    /// Custom user agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            image_timeout_secs: default_image_timeout_secs(),
            user_agent: None,
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
    pub search: SearchConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

impl Config {
    /// Search term for the search field at startup.
    #[must_use]
    pub fn default_term(&self) -> String {
        self.search
            .default_term
            .clone()
            .unwrap_or_else(|| DEFAULT_SEARCH_TERM.to_string())
    }

    /// Media type selected at startup.
    #[must_use]
    pub fn default_media(&self) -> MediaType {
        self.search.default_media.unwrap_or_default()
    }

    /// Search endpoint, falling back to the public iTunes API.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.search.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Slideshow period, clamped so a hand-edited file cannot request a
    /// zero or absurd interval.
    #[must_use]
    pub fn slideshow_interval(&self) -> Duration {
        let secs = self
            .slideshow
            .interval_secs
            .unwrap_or(DEFAULT_SLIDESHOW_INTERVAL_SECS)
            .clamp(MIN_SLIDESHOW_INTERVAL_SECS, MAX_SLIDESHOW_INTERVAL_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.network
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
                .max(1),
        )
    }

    #[must_use]
    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(
            self.network
                .image_timeout_secs
                .unwrap_or(DEFAULT_IMAGE_TIMEOUT_SECS)
                .max(1),
        )
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.network
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_term() -> Option<String> {
    Some(DEFAULT_SEARCH_TERM.to_string())
}

fn default_interval_secs() -> Option<u64> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_SECS)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_image_timeout_secs() -> Option<u64> {
    Some(DEFAULT_IMAGE_TIMEOUT_SECS)
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
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring invalid configuration");
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

// =============================================================================
// Tests
// =============================================================================
