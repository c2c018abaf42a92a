pub mod app_runner;
pub mod gdi;
pub mod host_platform;
pub mod message_box;
pub mod window_list;

pub use app_runner::run_fullscreen_overlay_app;
pub use gdi::GdiPainter;
pub use host_platform::WindowsHostPlatform;

use std::ffi::c_void;

use bs_platform::WindowId;
use windows::Win32::Foundation::HWND;

#[inline]
pub fn window_id(hwnd: HWND) -> WindowId {
    WindowId::from_raw(hwnd.0 as usize)
}

#[inline]
pub fn hwnd(window: WindowId) -> HWND {
    HWND(window.raw() as *mut c_void)
}
