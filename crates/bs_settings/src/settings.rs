use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults::*;

/// Tool settings.
///
/// Every field has a serde default so partial files keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Executable launched for the capture.
    #[serde(default = "default_capture_program")]
    pub capture_program: String,
    /// Title substring that identifies the capture window.
    #[serde(default = "default_window_title_marker")]
    pub window_title_marker: String,
    #[serde(default = "default_fps")]
    pub fps: u32,

    // Window watcher
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u32,
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,

    // Overlay
    #[serde(default = "default_overlay_delay_ms")]
    pub overlay_delay_ms: u32,
    #[serde(default = "default_overlay_alpha")]
    pub overlay_alpha: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capture_program: default_capture_program(),
            window_title_marker: default_window_title_marker(),
            fps: default_fps(),
            poll_interval_ms: default_poll_interval_ms(),
            max_poll_attempts: default_max_poll_attempts(),
            overlay_delay_ms: default_overlay_delay_ms(),
            overlay_alpha: default_overlay_alpha(),
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        default_config_dir()
            .join(".broadcast_screen")
            .join("settings.json")
    }

    /// Load settings from `path`.
    ///
    /// Falls back to defaults if the file is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                log::debug!("no settings at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "ignoring malformed settings file {}: {e}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Load from [`Settings::default_path`].
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }
}
