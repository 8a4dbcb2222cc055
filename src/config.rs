use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{HydroError, Result};

/// Tick rate for the event loop (100ms)
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Period of the background reminder loop
pub const REMINDER_INTERVAL: Duration = Duration::from_secs(60);

/// Accepted body weight range in kilograms
pub const MIN_WEIGHT: u32 = 30;
pub const MAX_WEIGHT: u32 = 200;

/// Daily goal per kilogram of body weight
pub const ML_PER_KG: u32 = 30;

/// Fixed amounts offered by the add bindings, in key order
pub const WATER_INCREMENTS: [u32; 3] = [100, 250, 500];

/// Number of plant growth stages
pub const PLANT_STAGES: u8 = 5;

/// Reminders fire on even hours between these (inclusive), 08:00 to 22:00
pub const REMINDER_FIRST_HOUR: u32 = 8;
pub const REMINDER_LAST_HOUR: u32 = 22;

/// Plant art is clipped to this many cells
pub const ART_WIDTH: usize = 24;
pub const ART_HEIGHT: usize = 10;

const DATA_FILE: &str = "water_data.json";
const LOG_FILE: &str = "hydroplant.log";
const ASSETS_DIR: &str = "assets";

fn data_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "hydroplant").ok_or(HydroError::NoDataDirectory)?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.to_path_buf())
}

/// Get the path to the tracker record.
///
/// Returns the path to `water_data.json` in the appropriate data directory:
/// - Linux: `~/.local/share/hydroplant/water_data.json`
/// - macOS: `~/Library/Application Support/hydroplant/water_data.json`
/// - Windows: `C:\Users\<User>\AppData\Roaming\hydroplant\water_data.json`
pub fn get_data_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(DATA_FILE))
}

/// Get the path to the log file.
///
/// Returns the path to `hydroplant.log` in the same data directory as the record.
pub fn get_log_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE))
}

/// Get the directory holding the plant art.
///
/// Prefers `assets/` next to the executable and falls back to the one in the
/// source tree, which is where it lives during `cargo run`.
pub fn get_assets_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ASSETS_DIR)));

    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(ASSETS_DIR),
    }
}

/// Size of the tracker panel, centred in the terminal
pub const PANEL_WIDTH: u16 = 46;
pub const PANEL_HEIGHT: u16 = 28;
