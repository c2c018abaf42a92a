pub use windows::core::{Error, Result};

pub use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};

pub use windows::Win32::UI::WindowsAndMessaging::{
    CS_HREDRAW, CS_OWNDC, CS_VREDRAW, WINDOW_EX_STYLE, WM_CLOSE, WM_CREATE, WM_DESTROY,
    WM_PAINT, WNDCLASS_STYLES, WS_EX_LAYERED, WS_EX_TOOLWINDOW, WS_EX_TOPMOST,
};
