//! Application configuration.

use peniko::Color;
use roughpad_core::rough::RoughOptions;
use roughpad_core::tools::ToolKind;
use roughpad_render::StrokeSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "ROUGHPAD_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// Parse a CSS color string like "#ff0000".
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::from_rgba8(r, g, b, 255))
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub default_tool: ToolKind,
    pub rough: RoughOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Roughpad".to_string(),
            width: 1280,
            height: 800,
            background_color: "#fafafa".to_string(),
            stroke_color: "#1e1e1e".to_string(),
            stroke_width: 1.0,
            default_tool: ToolKind::Line,
            rough: RoughOptions::default(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the file named by `ROUGHPAD_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.background()?;
        self.stroke()?;
        Ok(())
    }

    pub fn background(&self) -> Result<Color, ConfigError> {
        parse_color(&self.background_color)
            .ok_or_else(|| ConfigError::InvalidColor(self.background_color.clone()))
    }

    /// Pen for the renderer.
    pub fn stroke(&self) -> Result<StrokeSettings, ConfigError> {
        let color = parse_color(&self.stroke_color)
            .ok_or_else(|| ConfigError::InvalidColor(self.stroke_color.clone()))?;
        Ok(StrokeSettings {
            color,
            width: self.stroke_width,
        })
    }
}
