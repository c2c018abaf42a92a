pub mod selection;
pub mod watcher;

pub use selection::RectI32;

/// How the program starts once presets are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    /// Skip the overlay and capture the stored region.
    Direct(RectI32),
    /// Show the selection overlay.
    Interactive,
}

impl StartMode {
    pub fn is_interactive(&self) -> bool {
        matches!(self, StartMode::Interactive)
    }
}
