use bs_app::{StartMode, watcher};
use bs_capture::{Launcher, SystemSpawner};
use bs_settings::{PresetStore, Presets, Settings};

/// Everything the overlay needs to know about this run.
///
/// Built once at startup and owned by [`crate::App`]; handlers reach it through the app instead
/// of any process-wide state.
pub struct AppContext {
    pub settings: Settings,
    /// Preset to save the selection under. Empty = don't save.
    pub preset_name: String,
    pub store: PresetStore,
    pub launcher: Launcher,
    pub start_mode: StartMode,
}

impl AppContext {
    pub fn new(
        settings: Settings,
        store: PresetStore,
        presets: &Presets,
        preset_name: impl Into<String>,
        launcher: Launcher,
    ) -> Self {
        let preset_name = preset_name.into();
        let start_mode = presets.route(&preset_name);

        match start_mode {
            StartMode::Direct(region) => log::info!(
                "using preset '{preset_name}' ({}, {}, {}, {})",
                region.left,
                region.top,
                region.right,
                region.bottom
            ),
            StartMode::Interactive if !preset_name.is_empty() => log::info!(
                "preset '{preset_name}' not found in {}, showing the selector",
                store.path().display()
            ),
            StartMode::Interactive => {}
        }

        Self {
            settings,
            preset_name,
            store,
            launcher,
            start_mode,
        }
    }

    /// Like [`AppContext::new`], spawning real processes with the configured program and fps.
    pub fn with_system_launcher(
        settings: Settings,
        store: PresetStore,
        presets: &Presets,
        preset_name: impl Into<String>,
    ) -> Self {
        let launcher = Launcher::new(
            settings.capture_program.clone(),
            settings.fps,
            Box::new(SystemSpawner),
        );
        Self::new(settings, store, presets, preset_name, launcher)
    }

    /// A finished selection is saved only when a name was given and the region did not already
    /// come from that preset.
    pub fn should_save_preset(&self) -> bool {
        !self.preset_name.is_empty() && self.start_mode.is_interactive()
    }

    pub fn new_watcher(&self) -> watcher::Model {
        watcher::Model::new(
            &self.settings.window_title_marker,
            self.settings.poll_interval_ms,
            self.settings.max_poll_attempts,
        )
    }
}
