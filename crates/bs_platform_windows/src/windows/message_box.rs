use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MB_TOPMOST, MessageBoxW};
use windows::core::PCWSTR;

use crate::win_api::to_wide_chars;

#[inline]
pub fn show_error(hwnd: HWND, title: &str, message: &str) {
    let title_w = to_wide_chars(title);
    let message_w = to_wide_chars(message);

    unsafe {
        let _ = MessageBoxW(
            Some(hwnd),
            PCWSTR(message_w.as_ptr()),
            PCWSTR(title_w.as_ptr()),
            MB_OK | MB_ICONERROR | MB_TOPMOST,
        );
    }
}
