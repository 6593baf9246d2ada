//! User settings stored as settings.json in the app data directory

use crate::constants::{CAT_API_URL, MAX_PARALLEL_FETCHES};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Image source
    pub image_base_url: String,
    pub max_parallel_fetches: usize,
    /// Longest side of a decoded image; larger cats are downscaled
    pub max_image_side: u32,

    // Input
    pub keyboard_shortcuts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            image_base_url: CAT_API_URL.to_string(),
            max_parallel_fetches: MAX_PARALLEL_FETCHES,
            max_image_side: 1024,
            keyboard_shortcuts: true,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str::<Settings>(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings.sanitized()
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Clamp values a hand-edited file could break
    fn sanitized(mut self) -> Self {
        if self.image_base_url.trim().is_empty() {
            warn!("Empty image_base_url in settings, using default");
            self.image_base_url = CAT_API_URL.to_string();
        }
        self.max_parallel_fetches = self.max_parallel_fetches.clamp(1, 16);
        self.max_image_side = self.max_image_side.clamp(64, 4096);
        self
    }
}
