use crate::InputEvent;

/// Opaque window identifier.
///
/// Keeps platform window handles (e.g. Win32 `HWND`) from leaking across crate boundaries.
/// Platform backends convert to/from raw handles as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(usize);

impl WindowId {
    pub const INVALID: WindowId = WindowId(0);

    #[inline]
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> usize {
        self.0
    }
}

/// Minimal platform window-message handler.
///
/// The platform backend owns the event loop and window procedure; the host app only reacts to
/// typed events delivered on the UI thread.
pub trait WindowMessageHandler {
    type WindowHandle: Copy;

    /// Handle a platform-agnostic input event.
    ///
    /// Return `Some(result)` to mark the message as handled, or `None` to fall back to the platform
    /// default procedure.
    fn handle_input_event(&mut self, window: Self::WindowHandle, event: InputEvent)
    -> Option<isize>;

    /// Handle a paint request.
    ///
    /// The platform runner owns the WM_PAINT BeginPaint/EndPaint cycle and hands the host a
    /// painter for the duration of the call.
    fn handle_paint(
        &mut self,
        _window: Self::WindowHandle,
        _painter: &mut dyn crate::Painter,
    ) -> Option<isize> {
        None
    }

    /// Handle a close request.
    fn handle_close_requested(&mut self, _window: Self::WindowHandle) -> Option<isize> {
        None
    }
}
