//! TOML configuration loading and validation

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::ConfigError;
use crate::search::DEFAULT_MAX_DEPTH;

/// Deepest search accepted from configuration
pub const MAX_SEARCH_DEPTH: u8 = 6;

/// Engine and board settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rows and columns of the board
    pub board_size: usize,
    /// Alpha-beta depth in plies
    pub max_depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Desktop window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub show_debug: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 750.0,
            show_debug: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub window: WindowConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.engine.board_size;
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be in 1..={MAX_BOARD_SIZE}, got {size}"
            )));
        }
        let depth = self.engine.max_depth;
        if depth == 0 || depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "max_depth must be in 1..={MAX_SEARCH_DEPTH}, got {depth}"
            )));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::Validation(
                "window width and height must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
