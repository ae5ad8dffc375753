//! Configuration file support.
//!
//! Settings are read from `~/.config/lumina/config.toml` (or an explicit path)
//! and cover the element color, stroke width, text font, canvas size and
//! keyboard shortcuts. If no config file exists, defaults matching the diagram
//! page are used.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingError, KeybindingsConfig};
pub use types::{CanvasConfig, DrawingConfig};

use crate::draw::{FontDescriptor, RenderStyle};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#2563EB"
/// stroke_width = 2.0
/// font_family = "Inter"
/// font_size = 16.0
///
/// [canvas]
/// width = 800
/// height = 600
///
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Element appearance defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Surface dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Keyboard shortcuts for undo, clear and cancel
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 1.0 - 10.0
    /// - `font_size`: 8.0 - 72.0
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    pub fn validate_and_clamp(&mut self) {
        if !(1.0..=10.0).contains(&self.drawing.stroke_width) {
            warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-10.0 range",
                self.drawing.stroke_width
            );
            // NaN survives clamp(); fall back to the default instead
            self.drawing.stroke_width = if self.drawing.stroke_width.is_nan() {
                DrawingConfig::default().stroke_width
            } else {
                self.drawing.stroke_width.clamp(1.0, 10.0)
            };
        }

        if !(8.0..=72.0).contains(&self.drawing.font_size) {
            warn!(
                "Invalid font_size {:.1}, clamping to 8.0-72.0 range",
                self.drawing.font_size
            );
            self.drawing.font_size = if self.drawing.font_size.is_nan() {
                DrawingConfig::default().font_size
            } else {
                self.drawing.font_size.clamp(8.0, 72.0)
            };
        }

        if !self.drawing.default_color.is_valid() {
            warn!(
                "Invalid default_color {:?}, falling back to '#2563EB'",
                self.drawing.default_color
            );
            self.drawing.default_color = DrawingConfig::default().default_color;
        }

        if self.drawing.font_family.trim().is_empty() {
            warn!("Empty font_family, falling back to 'Inter'");
            self.drawing.font_family = DrawingConfig::default().font_family;
        }

        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        if !(1..=8192).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 1-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 8192);
        }

        if !(1..=8192).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 1-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 8192);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("lumina");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `path`, or returns defaults if the file does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON Schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Font descriptor for text elements.
    pub fn font_descriptor(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.drawing.font_family.clone(),
            self.drawing.font_weight.clone(),
            self.drawing.font_style.clone(),
            self.drawing.font_size,
        )
    }

    /// Stroke and font settings for rendering.
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            line_width: self.drawing.stroke_width,
            font: self.font_descriptor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{DIAGRAM_BLUE, RED};
    use tempfile::TempDir;

    #[test]
    fn defaults_match_diagram_page() {
        let config = Config::default();
        assert_eq!(config.drawing.default_color.to_color(), DIAGRAM_BLUE);
        assert_eq!(config.drawing.stroke_width, 2.0);
        assert_eq!(config.font_descriptor().to_pango_string(), "Inter 16px");
        assert_eq!((config.canvas.width, config.canvas.height), (800, 600));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_color = "red"

            [keybindings]
            undo = ["Ctrl+U"]
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_color.to_color(), RED);
        assert_eq!(config.drawing.font_size, 16.0);
        assert_eq!(config.keybindings.undo, vec!["Ctrl+U".to_string()]);
        assert_eq!(config.keybindings.cancel, vec!["Escape".to_string()]);
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.drawing.stroke_width = 40.0;
        config.drawing.font_size = 2.0;
        config.drawing.font_style = "wavy".to_string();
        config.drawing.default_color = ColorSpec::Name("nope".to_string());
        config.canvas.width = 0;

        config.validate_and_clamp();

        assert_eq!(config.drawing.stroke_width, 10.0);
        assert_eq!(config.drawing.font_size, 8.0);
        assert_eq!(config.drawing.font_style, "normal");
        assert_eq!(
            config.drawing.default_color,
            ColorSpec::Name("#2563EB".to_string())
        );
        assert_eq!(config.canvas.width, 1);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config.drawing.stroke_width, 2.0);
    }

    #[test]
    fn load_from_reads_and_validates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing]\nstroke_width = 0.1\n\n[canvas]\nwidth = 320\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.drawing.stroke_width, 1.0);
        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.height, 600);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing\nstroke_width = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn json_schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("drawing").is_some());
        assert!(properties.get("canvas").is_some());
        assert!(properties.get("keybindings").is_some());
    }
}
