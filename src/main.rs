mod app;
mod assets;
mod clock;
mod config;
mod cycle;
mod error;
mod event;
mod models;
mod scheduler;
mod setup;
mod store;
mod ui;
mod validation;

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::{Arc, mpsc};

use simplelog::{LevelFilter, WriteLogger};

use app::App;
use clock::{Clock, SystemClock};
use error::HydroError;
use scheduler::ReminderScheduler;
use store::{JsonStore, load_or_setup};

/// Open the log for appending so earlier runs stay readable
fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn init_logging() -> error::Result<()> {
    let log_file = open_log_file(&config::get_log_path()?)?;
    WriteLogger::init(LevelFilter::Info, simplelog::Config::default(), log_file)?;
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging()?;

    let clock = Arc::new(SystemClock);
    let store = JsonStore::open()?;
    log::info!("Using tracker record at {}", store.path().display());

    // Setup talks to the plain terminal, so it has to finish before the TUI starts
    let tracker = match load_or_setup(&store, clock.today(), setup::first_run) {
        Ok(tracker) => tracker,
        Err(HydroError::SetupCancelled) => {
            log::warn!("First-run setup cancelled, exiting");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let (tx, rx) = mpsc::channel();
    // Detached: the loop lives as long as the process
    ReminderScheduler::new(clock, tx, config::REMINDER_INTERVAL).spawn();

    let app = App::new(tracker, Box::new(store), config::get_assets_dir());
    let terminal = ratatui::init();
    let result = app.run(terminal, rx);
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_keeps_previous_runs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hydroplant.log");

        writeln!(open_log_file(&path).unwrap(), "first run").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second run").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first run\nsecond run\n");
    }
}
