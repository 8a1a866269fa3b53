//! Configuration for canvases and brushes.
//!
//! YAML file with per-field defaults; precedence is CLI > file > defaults.
//!
//! ```yaml
//! version: 1
//! canvas:
//!   width: 800
//!   height: 600
//!   background: "#00000000"
//! brush:
//!   color: "#000000"
//!   width: 5
//! output:
//!   file_name: drawing.png
//! ```

use crate::color::Rgba;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas surface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Colour the canvas is cleared to, as hex.
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_background() -> String {
    "#00000000".to_string()
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Brush settings for freehand painting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushConfig {
    /// Initial brush colour, as hex.
    #[serde(default = "default_brush_color")]
    pub color: String,

    /// Stroke width in pixels.
    #[serde(default = "default_brush_width")]
    pub width: u32,
}

fn default_brush_color() -> String {
    "#000000".to_string()
}
fn default_brush_width() -> u32 {
    5
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: default_brush_color(),
            width: default_brush_width(),
        }
    }
}

/// Where saved drawings go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default file name for saved drawings.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    "drawing.png".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Brush settings.
    #[serde(default)]
    pub brush: BrushConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            brush: BrushConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or if a colour
    /// field is not valid hex.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;

        config.background()?;
        config.brush_color()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::ConfigNotFound(path)) => {
                tracing::debug!(%path, "no configuration file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring invalid configuration, using defaults");
                Self::default()
            }
        }
    }

    /// Canvas background colour.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the configured value is not hex.
    pub fn background(&self) -> Result<Rgba> {
        Rgba::from_hex(&self.canvas.background)
    }

    /// Initial brush colour.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the configured value is not hex.
    pub fn brush_color(&self) -> Result<Rgba> {
        Rgba::from_hex(&self.brush.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.brush.width, 5);
        assert_eq!(config.output.file_name, "drawing.png");
        assert_eq!(config.background().unwrap(), Rgba::TRANSPARENT);
        assert_eq!(config.brush_color().unwrap(), Rgba::BLACK);
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = Config::parse("version: 1").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r##"
version: 1
canvas:
  width: 320
  height: 200
  background: "#ffffff"
brush:
  color: "#ff0000"
  width: 9
output:
  file_name: sketch.png
"##;

        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.height, 200);
        assert_eq!(config.background().unwrap(), Rgba::WHITE);
        assert_eq!(config.brush_color().unwrap(), Rgba::RED);
        assert_eq!(config.brush.width, 9);
        assert_eq!(config.output.file_name, "sketch.png");
    }

    #[test]
    fn test_config_partial_section_keeps_defaults() {
        let yaml = "canvas:\n  width: 64\n";
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.canvas.width, 64);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.brush, BrushConfig::default());
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r"
version: 1
canvas:
  width: not_a_number
";

        let err = Config::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains('4'), "Error should include line number");
    }

    #[test]
    fn test_config_rejects_bad_colour() {
        let yaml = "brush:\n  color: chartreuse\n";
        assert!(matches!(Config::parse(yaml), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();

        let missing = Config::load_or_default(dir.path().join("nope.yaml"));
        assert_eq!(missing, Config::default());

        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "canvas: [1, 2").unwrap();
        assert_eq!(Config::load_or_default(&broken), Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "brush:\n  width: 12\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.brush.width, 12);
    }

    #[test]
    fn test_config_serializes_back() {
        let yaml = serde_yaml_ng::to_string(&Config::default()).unwrap();
        assert_eq!(Config::parse(&yaml).unwrap(), Config::default());
    }
}
