//! User settings - defaults for scene items, saved as JSON in the config directory

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::geometry::Color;
use crate::stamps::ElbowConnector;
use crate::style::{ArrowStyle, StrokeStyle};

/// Returns the path to the settings file: `~/.config/stamps-rs/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("stamps-rs");
    path.push("settings.json");
    path
}

/// Persisted defaults for rendering scenes.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files. Scene items fall back to these
/// values for anything they leave out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Canvas
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub background: Option<Color>,

    // Stroke
    pub color: Color,
    pub line_width: f64,

    // Tilings
    pub spacing: f64,
    pub hex_radius: f64,
    pub dot_size: f64,

    // Connectors
    pub elbow_fraction: f64,
    pub arrow: ArrowStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            background: Some(Color::WHITE),

            color: Color::GUIDE_GREY,
            line_width: 1.0,

            spacing: 20.0,
            hex_radius: 100.0,
            dot_size: 1.0,

            elbow_fraction: ElbowConnector::DEFAULT_ELBOW_FRACTION,
            arrow: ArrowStyle::default(),
        }
    }
}

impl Settings {
    /// Load settings from the config directory, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load settings from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to the config directory as pretty JSON.
    pub fn save(&self) {
        self.save_to(&settings_path());
    }

    /// Save settings to `path` as pretty JSON, logging any failure.
    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Saved settings to {}", path.display()),
                Err(e) => log::warn!("Failed to write settings: {}", e),
            },
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Stroke style built from the default color and line width
    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle::new(self.color, self.line_width)
    }
}
