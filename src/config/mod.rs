//! Configuration module for trellis-view
//!
//! The configuration is optional. When no file is given, or a section is
//! missing, built-in defaults apply.
//!
//! # Config Location
//!
//! The default config file lives in the platform config directory:
//! - **Linux**: `~/.config/trellis-view/config.toml`
//! - **macOS**: `~/Library/Application Support/trellis-view/config.toml`
//! - **Windows**: `%APPDATA%\trellis-view\config.toml`
//!
//! # Example
//!
//! ```toml
//! [engine]
//! program = "./target/release/convolutional-code"
//! check_exit_status = true
//!
//! [layout]
//! canvas_height = 500.0
//! step_length = 100.0
//! ```

use crate::error::{Result, TrellisError};
use crate::trellis::TrellisGeometry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for config directories
pub const APP_ID: &str = "trellis-view";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Default engine executable, relative to the working directory
pub const DEFAULT_ENGINE_PROGRAM: &str = "./target/release/convolutional-code";

/// Get the path to the default config file
pub fn config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID).join(CONFIG_FILE))
}

/// How to run the external decoding engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engine executable
    pub program: PathBuf,

    /// Extra command-line arguments
    pub args: Vec<String>,

    /// Treat a non-success exit status as failure even without stderr output
    pub check_exit_status: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_ENGINE_PROGRAM),
            args: Vec::new(),
            check_exit_status: true,
        }
    }
}

/// Trellis canvas geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Full canvas height; paths start at half of it
    pub canvas_height: f64,

    /// Horizontal distance between trellis levels
    pub step_length: f64,

    /// Extra width added to the longest path
    pub margin: f64,

    pub marker_radius: f64,

    /// Distance between the last node and the metric label
    pub label_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_height: 500.0,
            step_length: 100.0,
            margin: 50.0,
            marker_radius: 3.0,
            label_offset: 8.0,
        }
    }
}

impl LayoutConfig {
    pub fn geometry(&self) -> TrellisGeometry {
        TrellisGeometry {
            canvas_half_height: self.canvas_height / 2.0,
            step_length: self.step_length,
            marker_radius: self.marker_radius,
            label_offset: self.label_offset,
        }
    }
}

/// Initial contents of the submission form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub observed: String,
    pub generators: String,
    pub probability: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            observed: "00010001".to_string(),
            generators: "101,110".to_string(),
            probability: "0.1".to_string(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub layout: LayoutConfig,
    pub defaults: FormDefaults,
}

impl AppConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TrellisError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            TrellisError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default location, returning defaults if the file is
    /// absent or invalid
    pub fn load_or_default() -> Self {
        match config_path() {
            Some(path) if path.exists() => Self::load(&path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Save config as TOML, creating parent directories.
    ///
    /// The viewer itself only reads its config; this writes a starting file
    /// for tooling and setup scripts.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TrellisError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| TrellisError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| TrellisError::Config(format!("Failed to write config: {}", e)))
    }

    /// Reject values the layout engine or process bridge cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.engine.program.as_os_str().is_empty() {
            return Err(TrellisError::Config("engine.program must not be empty".to_string()));
        }

        let layout = &self.layout;
        for (name, value) in [
            ("layout.canvas_height", layout.canvas_height),
            ("layout.step_length", layout.step_length),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TrellisError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("layout.margin", layout.margin),
            ("layout.marker_radius", layout.marker_radius),
            ("layout.label_offset", layout.label_offset),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TrellisError::Config(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.engine.program, PathBuf::from(DEFAULT_ENGINE_PROGRAM));
        assert!(config.engine.check_exit_status);
        assert_eq!(config.layout.geometry().canvas_half_height, 250.0);
        assert_eq!(config.defaults.generators, "101,110");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            "[engine]\nprogram = \"/opt/cc/decoder\"\n\n[layout]\nstep_length = 80.0\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.engine.program, PathBuf::from("/opt/cc/decoder"));
        assert!(config.engine.check_exit_status);
        assert_eq!(config.layout.step_length, 80.0);
        assert_eq!(config.layout.canvas_height, 500.0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = AppConfig::default();
        config.engine.args = vec!["--verbose".to_string()];
        config.layout.margin = 20.0;
        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[layout]\nstep_length = 0.0\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("layout.step_length"));
    }

    #[test]
    fn test_unparseable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[layout\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(TrellisError::Config(_))));
    }
}
