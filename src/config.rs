//! Configuration for navigation requests
//!
//! Controls the scroll directive and the name of the map query parameter.
//! Stored as TOML in the user's config directory
//! (`~/.config/facetnav/config.toml` on Linux); a missing file means defaults.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Element the page scrolls to after navigating
pub const DEFAULT_SCROLL_ANCHOR: &str = "search-result-anchor";

/// Height of the fixed page header, in pixels
pub const HEADER_SCROLL_OFFSET: i32 = 130;

/// Query parameter carrying the map string
pub const MAP_QUERY_KEY: &str = "map";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FacetnavConfig {
    /// Id of the element scrolled to after navigation
    pub scroll_anchor: String,

    /// Header height; the scroll directive uses its negation
    pub header_scroll_offset: i32,

    /// Name of the map query parameter
    pub map_query_key: String,
}

impl Default for FacetnavConfig {
    fn default() -> Self {
        Self {
            scroll_anchor: DEFAULT_SCROLL_ANCHOR.to_string(),
            header_scroll_offset: HEADER_SCROLL_OFFSET,
            map_query_key: MAP_QUERY_KEY.to_string(),
        }
    }
}

impl FacetnavConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("facetnav").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or the
    /// file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a TOML file
    ///
    /// Keys missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Vertical scroll offset sent with navigation requests
    #[must_use]
    pub const fn scroll_top(&self) -> i32 {
        -self.header_scroll_offset
    }
}
