pub mod defaults;
pub mod presets;
pub mod settings;

pub use presets::{PresetError, PresetStore, Presets};
pub use settings::Settings;
