use bs_platform::{
    HostPlatform, PlatformServicesError, TopLevelWindow, WindowId, WindowSystem,
};

use crate::win_api;
use crate::win32::WM_CLOSE;

use super::{message_box, window_list};

/// Windows host-facing platform implementation.
///
/// Wraps the Win32 side effects the overlay and the window watcher need behind
/// `bs_platform::HostPlatform` and `bs_platform::WindowSystem`, so the host never calls
/// `win_api::*` directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsHostPlatform;

impl WindowsHostPlatform {
    pub fn new() -> Self {
        Self
    }

    fn window_err(e: impl std::fmt::Debug) -> PlatformServicesError {
        PlatformServicesError::Window(format!("{e:?}"))
    }
}

impl HostPlatform for WindowsHostPlatform {
    type WindowHandle = WindowId;

    fn screen_size(&self) -> (i32, i32) {
        win_api::get_screen_size()
    }

    fn show_window(&self, window: WindowId) -> Result<(), PlatformServicesError> {
        win_api::show_window(super::hwnd(window)).map_err(Self::window_err)
    }

    fn hide_window(&self, window: WindowId) -> Result<(), PlatformServicesError> {
        win_api::hide_window(super::hwnd(window)).map_err(Self::window_err)
    }

    fn set_window_topmost(
        &self,
        window: WindowId,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), PlatformServicesError> {
        win_api::set_window_topmost(super::hwnd(window), x, y, width, height)
            .map_err(Self::window_err)
    }

    fn set_window_alpha(&self, window: WindowId, alpha: u8) -> Result<(), PlatformServicesError> {
        win_api::set_layered_alpha(super::hwnd(window), alpha).map_err(Self::window_err)
    }

    fn start_timer(
        &self,
        window: WindowId,
        timer_id: u32,
        interval_ms: u32,
    ) -> Result<(), PlatformServicesError> {
        win_api::start_timer(super::hwnd(window), timer_id, interval_ms).map_err(Self::window_err)
    }

    fn stop_timer(&self, window: WindowId, timer_id: u32) -> Result<(), PlatformServicesError> {
        win_api::stop_timer(super::hwnd(window), timer_id).map_err(Self::window_err)
    }

    fn request_redraw(&self, window: WindowId) -> Result<(), PlatformServicesError> {
        win_api::request_redraw(super::hwnd(window)).map_err(Self::window_err)
    }

    fn capture_mouse(&self, window: WindowId) {
        win_api::capture_mouse(super::hwnd(window));
    }

    fn release_mouse(&self) {
        win_api::release_mouse();
    }

    fn request_close(&self, window: WindowId) -> Result<(), PlatformServicesError> {
        win_api::post_message(super::hwnd(window), WM_CLOSE, 0, 0).map_err(Self::window_err)
    }

    fn show_error_message(&self, window: WindowId, title: &str, message: &str) {
        message_box::show_error(super::hwnd(window), title, message);
    }
}

impl WindowSystem for WindowsHostPlatform {
    fn list_windows(&self) -> Result<Vec<TopLevelWindow>, PlatformServicesError> {
        window_list::list_top_level_windows()
    }

    fn lower_window(&self, window: WindowId) -> Result<(), PlatformServicesError> {
        win_api::set_window_bottom(super::hwnd(window)).map_err(Self::window_err)
    }
}
