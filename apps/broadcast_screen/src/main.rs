use std::process::ExitCode;

use anyhow::bail;
use bs_app::StartMode;
use bs_settings::PresetStore;
use clap::Parser;

use broadcast_screen::{AppContext, Cli};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = broadcast_screen::load_settings(&cli);
    let store = PresetStore::new(&cli.config);
    let presets = broadcast_screen::load_presets(&store)?;

    if cli.list {
        for line in broadcast_screen::preset_listing(&presets) {
            println!("{line}");
        }
        return Ok(());
    }

    if cli.dry_run {
        let StartMode::Direct(region) = presets.route(&cli.preset) else {
            bail!(
                "--dry-run needs a preset stored in {}",
                store.path().display()
            );
        };
        println!(
            "{}",
            broadcast_screen::capture_command(&settings, region).command_line()
        );
        return Ok(());
    }

    let ctx = AppContext::with_system_launcher(settings, store, &presets, cli.preset);
    run_host(ctx)
}

#[cfg(windows)]
fn run_host(ctx: AppContext) -> anyhow::Result<()> {
    use anyhow::Context;

    bs_host_windows::run(ctx).context("selection overlay failed")
}

#[cfg(not(windows))]
fn run_host(ctx: AppContext) -> anyhow::Result<()> {
    let session = broadcast_screen::launch_stored_preset(&ctx)?;
    log::info!(
        "capture started (pid {}); moving its window to the back needs Windows",
        session.process.pid
    );
    Ok(())
}
