use bs_app::watcher::Outcome;
use bs_app::{RectI32, selection, watcher};
use bs_platform::WindowId;

/// Host command queue items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Selection core action (platform-neutral). Executed by the host.
    Selection(selection::Action),
    /// Watcher core action (platform-neutral). Executed by the host.
    Watcher(watcher::Action),

    /// Make the overlay full-screen, topmost and translucent, then show it.
    ShowOverlay,
    /// Hide the overlay and release the pointer.
    HideOverlay,
    /// Request redraw (full window).
    RequestRedraw,

    CaptureMouse,
    ReleaseMouse,

    /// Start a capture of the region.
    Launch(RectI32),
    /// Enumerate top-level windows and feed them to the watcher.
    PollWindows,
    /// Push a window to the bottom of the z-order.
    LowerWindow(WindowId),
    /// The watcher is done.
    Finish(Outcome),

    /// Overlay dismissed without a selection.
    Cancel,
    /// Close the window and leave the message loop.
    Quit,

    StartTimer(u32, u32),
    StopTimer(u32),

    /// Show an error dialog.
    ShowError(String),
}
