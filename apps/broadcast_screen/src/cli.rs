use std::path::PathBuf;

use bs_settings::defaults::default_preset_path;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "broadcast_screen",
    version,
    about = "Drag-select a screen region and broadcast it with VLC"
)]
pub struct Cli {
    /// Preset to replay, or to save the new selection under (empty: always select)
    #[arg(short, long, default_value = "")]
    pub preset: String,

    /// Preset file
    #[arg(short, long, default_value_os_t = default_preset_path())]
    pub config: PathBuf,

    /// Tool settings file (JSON)
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Capture frame rate, overriding the settings file
    #[arg(long)]
    pub fps: Option<u32>,

    /// Print the capture command for a stored preset and exit
    #[arg(long)]
    pub dry_run: bool,

    /// List stored presets and exit
    #[arg(long)]
    pub list: bool,
}
