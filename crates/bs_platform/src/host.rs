use thiserror::Error;

use crate::WindowId;

/// Error returned by host-facing platform side-effect APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformServicesError {
    #[error("window error: {0}")]
    Window(String),
    #[error("window enumeration failed: {0}")]
    Enumeration(String),
}

/// 24-bit color used by the overlay painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Drawing surface handed to the host during a paint cycle.
pub trait Painter {
    /// Fill the whole client area.
    fn fill_background(&mut self, color: Rgb);

    /// Draw a filled rectangle with an outline of `outline_width` pixels.
    ///
    /// Corners may arrive in any order; the painter normalizes them.
    #[allow(clippy::too_many_arguments)]
    fn draw_rect(
        &mut self,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        fill: Rgb,
        outline: Rgb,
        outline_width: i32,
    );
}

/// Minimal host-facing platform API.
///
/// This is the boundary where the host requests platform side effects (show/hide window,
/// timers, mouse capture) without reaching into a backend's internal helpers.
pub trait HostPlatform {
    type WindowHandle: Copy;

    fn screen_size(&self) -> (i32, i32);

    fn show_window(&self, window: Self::WindowHandle) -> Result<(), PlatformServicesError>;
    fn hide_window(&self, window: Self::WindowHandle) -> Result<(), PlatformServicesError>;

    fn set_window_topmost(
        &self,
        window: Self::WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), PlatformServicesError>;

    /// Set whole-window opacity (0 = invisible, 255 = opaque).
    fn set_window_alpha(
        &self,
        window: Self::WindowHandle,
        alpha: u8,
    ) -> Result<(), PlatformServicesError>;

    fn start_timer(
        &self,
        window: Self::WindowHandle,
        timer_id: u32,
        interval_ms: u32,
    ) -> Result<(), PlatformServicesError>;

    fn stop_timer(
        &self,
        window: Self::WindowHandle,
        timer_id: u32,
    ) -> Result<(), PlatformServicesError>;

    fn request_redraw(&self, window: Self::WindowHandle) -> Result<(), PlatformServicesError>;

    /// Route all pointer input to `window` until released.
    fn capture_mouse(&self, window: Self::WindowHandle);
    fn release_mouse(&self);

    /// Ask `window` to close once the current message has been handled.
    ///
    /// Never destroys synchronously: the handler issuing the request stays alive until it
    /// returns.
    fn request_close(&self, window: Self::WindowHandle) -> Result<(), PlatformServicesError>;

    fn show_error_message(&self, window: Self::WindowHandle, title: &str, message: &str);
}

/// A top-level window as reported by the windowing system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelWindow {
    pub id: WindowId,
    pub title: String,
}

/// Windowing-system queries used to find and demote the capture window.
pub trait WindowSystem {
    /// Enumerate the current top-level windows.
    ///
    /// Each call re-queries the system; nothing is cached between calls.
    fn list_windows(&self) -> Result<Vec<TopLevelWindow>, PlatformServicesError>;

    /// Lower `window` below all other windows.
    fn lower_window(&self, window: WindowId) -> Result<(), PlatformServicesError>;
}
