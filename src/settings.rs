//! Demo settings
//!
//! Loaded from a JSON file natively and from LocalStorage on the web.
//! Every field has a default, so partial files are fine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::StarFieldParams;
use crate::text::FontSize;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for the star field; `None` picks one from the clock
    pub seed: Option<u64>,

    // === Screen ===
    pub screen_width: u32,
    pub screen_height: u32,

    // === Star field ===
    pub stars: StarFieldParams,

    // === Simulation ===
    /// Largest simulation sub-step (seconds)
    pub precision: f32,
    /// Bouncing box speed along each axis (pixels/s)
    pub box_speed: f32,

    // === HUD ===
    pub message: String,
    pub message_font: FontSize,
    pub box_padding: f32,
    pub show_fps: bool,
    pub fps_font: FontSize,

    // === Camera ===
    pub zoom_factor: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            stars: StarFieldParams::default(),

            precision: PRECISION,
            box_speed: BOX_SPEED,

            message: "  Star  \n  Field \n  Demo  ".to_string(),
            message_font: FontSize::Base,
            box_padding: BOX_PADDING,
            show_fps: true,
            fps_font: FontSize::Xs,

            zoom_factor: ZOOM_FACTOR,
        }
    }
}

impl Settings {
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "starfield_settings";

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the frame loop cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.precision > 0.0) {
            return Err(SettingsError::Invalid {
                field: "precision",
                reason: format!("must be positive, got {}", self.precision),
            });
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(SettingsError::Invalid {
                field: "screen",
                reason: format!("{}x{} has no area", self.screen_width, self.screen_height),
            });
        }
        if !(self.zoom_factor > 1.0) {
            return Err(SettingsError::Invalid {
                field: "zoom_factor",
                reason: format!("must be greater than 1, got {}", self.zoom_factor),
            });
        }
        Ok(())
    }

    /// Read and validate a JSON settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.stars.count, STAR_COUNT);
        assert_eq!(s.precision, 0.0025);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "seed": 7, "stars": { "count": 10 } }"#).unwrap();
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.stars.count, 10);
        assert_eq!(s.stars.world_width, WORLD_WIDTH);
        assert_eq!(s.screen_width, SCREEN_WIDTH);
        assert_eq!(s.message_font, FontSize::Base);
    }

    #[test]
    fn test_json_round_trip() {
        let mut s = Settings::default();
        s.seed = Some(42);
        s.fps_font = FontSize::Lg;
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "precision": 0.0 }"#),
            Err(SettingsError::Invalid {
                field: "precision",
                ..
            })
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "screen_width": 0 }"#),
            Err(SettingsError::Invalid { field: "screen", .. })
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "zoom_factor": 0.5 }"#),
            Err(SettingsError::Invalid {
                field: "zoom_factor",
                ..
            })
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from_path(std::path::Path::new("/nonexistent/starfield.json"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/starfield.json"));
    }
}
