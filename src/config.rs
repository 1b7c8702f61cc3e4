//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! weather-face.toml file. It stands in for the platform resource tables:
//! colors, the round/rectangular dimension presets, the redraw cadence and
//! the companion data path.

use crate::DisplayGeometry;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::Size;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "weather-face.toml";

/// Path the companion publishes weather updates under
pub const WATCHFACE_DATA_PATH: &str = "/sunshine-wear-update-watchface";

/// Largest accepted surface side in pixels
pub const MAX_DIMENSION: u32 = 4096;

/// Application configuration loaded from weather-face.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Surface size, colors and redraw cadence
    pub display: DisplayConfig,
    /// Text placement presets
    pub dimensions: DimensionsConfig,
    /// Companion data layer settings
    pub sync: SyncConfig,
}

/// Display and redraw configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Interactive background as `[r, g, b]`
    pub background: [u8; 3],
    /// Time and temperature text color as `[r, g, b]`
    pub text_color: [u8; 3],
    /// Redraw interval while interactive, in milliseconds
    pub interactive_update_ms: u64,
}

/// Dimension presets; `rect` and `round` hold the shape-specific values
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DimensionsConfig {
    /// Baseline of the time text
    pub y_offset: f32,
    /// Temperature text size in pixels
    pub temp_text_size: f32,
    /// Gap between the icon and the temperature text
    pub temp_text_y_offset: f32,
    pub rect: ShapePreset,
    pub round: ShapePreset,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ShapePreset {
    pub x_offset: f32,
    pub text_size: f32,
}

/// Companion sync configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Only data items under this path update the face
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            display: DisplayConfig {
                width: 240,
                height: 240,
                background: [0x03, 0xA9, 0xF4], // Sunshine light blue
                text_color: [0xFF, 0xFF, 0xFF],
                interactive_update_ms: 1000,
            },
            dimensions: DimensionsConfig {
                y_offset: 80.0,
                temp_text_size: 20.0,
                temp_text_y_offset: 24.0,
                rect: ShapePreset {
                    x_offset: 15.0,
                    text_size: 40.0,
                },
                round: ShapePreset {
                    x_offset: 25.0,
                    text_size: 45.0,
                },
            },
            sync: SyncConfig {
                path: WATCHFACE_DATA_PATH.to_string(),
            },
        }
    }
}

impl DisplayConfig {
    fn has_valid_size(&self) -> bool {
        (1..=MAX_DIMENSION).contains(&self.width) && (1..=MAX_DIMENSION).contains(&self.height)
    }
}

impl Config {
    /// Load configuration from weather-face.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) if !config.display.has_valid_size() => {
                    warn!(
                        "Display size {}x{} is outside 1..={} pixels",
                        config.display.width, config.display.height, MAX_DIMENSION
                    );
                    warn!("Using default configuration");
                    Self::default()
                }
                Ok(config) => {
                    info!(
                        "Loaded configuration from {} ({}x{})",
                        path.as_ref().display(),
                        config.display.width,
                        config.display.height
                    );
                    config
                }
                Err(e) => {
                    warn!("Invalid config file format: {}", e);
                    warn!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                info!("No config file found, using default configuration");
                Self::default()
            }
        }
    }

    /// Save configuration as TOML to the given path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Geometry for the given screen shape.
    pub fn geometry(&self, is_round: bool) -> DisplayGeometry {
        let dims = &self.dimensions;
        let preset = if is_round { dims.round } else { dims.rect };
        DisplayGeometry {
            x_offset: preset.x_offset,
            y_offset: dims.y_offset,
            temp_text_y_offset: dims.temp_text_y_offset,
            text_size: preset.text_size,
            temp_text_size: dims.temp_text_size,
            is_round,
        }
    }

    pub fn bounds(&self) -> Size {
        Size::new(self.display.width, self.display.height)
    }

    pub fn background_color(&self) -> Rgb888 {
        let [r, g, b] = self.display.background;
        Rgb888::new(r, g, b)
    }

    pub fn text_color(&self) -> Rgb888 {
        let [r, g, b] = self.display.text_color;
        Rgb888::new(r, g, b)
    }
}
