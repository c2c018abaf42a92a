use bs_platform::{InputEvent, KeyCode, MouseButton};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::*;

/// Extract mouse coordinates from Win32 `LPARAM`.
#[inline]
fn extract_mouse_coords(lparam: LPARAM) -> (i32, i32) {
    let x = (lparam.0 as i16) as i32;
    let y = ((lparam.0 >> 16) as i16) as i32;
    (x, y)
}

/// Convert Win32 window messages to platform-agnostic [`InputEvent`].
pub struct EventConverter;

impl EventConverter {
    /// Returns `None` if the message is not an input event.
    pub fn convert(msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<InputEvent> {
        match msg {
            WM_MOUSEMOVE => {
                let (x, y) = extract_mouse_coords(lparam);
                Some(InputEvent::MouseMove { x, y })
            }

            WM_LBUTTONDOWN => {
                let (x, y) = extract_mouse_coords(lparam);
                Some(InputEvent::MouseDown {
                    x,
                    y,
                    button: MouseButton::Left,
                })
            }

            WM_LBUTTONUP => {
                let (x, y) = extract_mouse_coords(lparam);
                Some(InputEvent::MouseUp {
                    x,
                    y,
                    button: MouseButton::Left,
                })
            }

            WM_KEYDOWN => Some(InputEvent::KeyDown {
                key: KeyCode(wparam.0 as u32),
            }),

            WM_TIMER => Some(InputEvent::Timer {
                id: wparam.0 as u32,
            }),

            _ => None,
        }
    }
}
