use std::path::PathBuf;

pub fn default_capture_program() -> String {
    "vlc".to_string()
}

/// Title substring of the capture window (matched case-insensitively).
pub fn default_window_title_marker() -> String {
    "vlc".to_string()
}

pub fn default_fps() -> u32 {
    30
}

pub fn default_poll_interval_ms() -> u32 {
    bs_app::watcher::DEFAULT_POLL_INTERVAL_MS
}

/// About a minute at the default poll interval. 0 disables the limit.
pub fn default_max_poll_attempts() -> u32 {
    600
}

pub fn default_overlay_delay_ms() -> u32 {
    250
}

/// 0.2 opacity.
pub fn default_overlay_alpha() -> u8 {
    51
}

pub fn default_preset_path() -> PathBuf {
    PathBuf::from("./config.yaml")
}

/// Base directory for per-user files.
pub fn default_config_dir() -> PathBuf {
    // Prefer a user home directory.
    if let Ok(home_dir) = std::env::var("USERPROFILE") {
        return PathBuf::from(home_dir);
    }
    if let Ok(home_dir) = std::env::var("HOME") {
        return PathBuf::from(home_dir);
    }

    // Fallback: program directory.
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.to_path_buf();
    }

    // Last resort: cwd.
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
