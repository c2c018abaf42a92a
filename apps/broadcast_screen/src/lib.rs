pub mod cli;

pub use bs_host_windows::{
    App, AppContext, Command, CommandExecutor, app, command_executor, constants, core_bridge,
    error,
};

pub use bs_app as models;
pub use bs_capture as capture;
pub use bs_settings as settings;

pub use cli::Cli;

use anyhow::{Context, bail};
use bs_app::{RectI32, StartMode};
use bs_capture::{CaptureCommand, CaptureCommandBuilder, CaptureSession};
use bs_settings::{PresetStore, Presets, Settings};

/// Settings for this run: the chosen file (or the per-user default) plus CLI overrides.
pub fn load_settings(cli: &Cli) -> Settings {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    if let Some(fps) = cli.fps {
        settings.fps = fps;
    }
    settings
}

pub fn load_presets(store: &PresetStore) -> anyhow::Result<Presets> {
    store
        .load()
        .with_context(|| format!("could not load presets from {}", store.path().display()))
}

/// One `name: [x1, y1, x2, y2]` line per preset, sorted by name.
pub fn preset_listing(presets: &Presets) -> Vec<String> {
    presets
        .iter()
        .map(|(name, r)| {
            format!(
                "{name}: [{}, {}, {}, {}] ({}x{})",
                r.left,
                r.top,
                r.right,
                r.bottom,
                r.width(),
                r.height()
            )
        })
        .collect()
}

pub fn capture_command(settings: &Settings, region: RectI32) -> CaptureCommand {
    CaptureCommandBuilder::new(region)
        .with_program(settings.capture_program.clone())
        .with_fps(settings.fps)
        .build()
}

/// Start a stored preset's capture without the overlay or the window watcher.
///
/// Used where no overlay backend exists; the capture window is left where it opens.
pub fn launch_stored_preset(ctx: &AppContext) -> anyhow::Result<CaptureSession> {
    let StartMode::Direct(region) = ctx.start_mode else {
        bail!(
            "the selection overlay is only available on Windows; pass a --preset stored in {}",
            ctx.store.path().display()
        );
    };
    ctx.launcher
        .launch(region)
        .with_context(|| format!("could not launch preset '{}'", ctx.preset_name))
}
