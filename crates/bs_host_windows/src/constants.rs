use bs_platform::Rgb;

pub const WINDOW_CLASS_NAME: &str = "broadcast_screen_overlay";

/// Title used for user-facing error dialogs.
pub const APP_TITLE: &str = "broadcast_screen";

// ==================== Timers ====================

/// One-shot: show the overlay once the window has settled.
pub const TIMER_OVERLAY_DELAY_ID: u32 = 2001;

/// Interval: look for the capture window.
pub const TIMER_WATCH_POLL_ID: u32 = 2002;

// ==================== Overlay colors ====================

/// grey11
pub const OVERLAY_BACKGROUND: Rgb = Rgb(28, 28, 28);

/// maroon3
pub const MARKER_FILL: Rgb = Rgb(176, 48, 96);

pub const MARKER_OUTLINE: Rgb = Rgb(255, 0, 0);
pub const MARKER_OUTLINE_WIDTH: i32 = 3;
