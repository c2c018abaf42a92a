use bs_platform::{PlatformServicesError, TopLevelWindow};
use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::System::Threading::GetCurrentProcessId;
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowTextW, GetWindowThreadProcessId, IsWindowVisible,
};

struct EnumState {
    own_pid: u32,
    windows: Vec<TopLevelWindow>,
}

/// Enumerate visible, titled top-level windows of other processes (z-order, top first).
pub fn list_top_level_windows() -> Result<Vec<TopLevelWindow>, PlatformServicesError> {
    let mut state = EnumState {
        own_pid: unsafe { GetCurrentProcessId() },
        windows: Vec::new(),
    };

    unsafe {
        EnumWindows(
            Some(enum_windows_proc),
            LPARAM(&mut state as *mut EnumState as isize),
        )
        .map_err(|e| PlatformServicesError::Enumeration(format!("{e:?}")))?;
    }

    Ok(state.windows)
}

unsafe extern "system" fn enum_windows_proc(hwnd: HWND, lparam: LPARAM) -> windows::core::BOOL {
    unsafe {
        let state = &mut *(lparam.0 as *mut EnumState);

        if !IsWindowVisible(hwnd).as_bool() {
            return windows::core::BOOL::from(true);
        }

        let mut window_pid = 0;
        GetWindowThreadProcessId(hwnd, Some(&mut window_pid));
        if window_pid == state.own_pid {
            return windows::core::BOOL::from(true);
        }

        let mut title_buffer = [0u16; 256];
        let title_len = GetWindowTextW(hwnd, &mut title_buffer);
        if title_len <= 0 {
            return windows::core::BOOL::from(true);
        }

        state.windows.push(TopLevelWindow {
            id: super::window_id(hwnd),
            title: String::from_utf16_lossy(&title_buffer[..title_len as usize]),
        });

        windows::core::BOOL::from(true)
    }
}
