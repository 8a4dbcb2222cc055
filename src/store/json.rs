use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::get_data_path;
use crate::error::Result;
use crate::models::TrackerState;

use super::{StateStore, record_json};

/// Tracker record kept as pretty-printed JSON in a single file
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Open the store at the default data path
    pub fn open() -> Result<Self> {
        Ok(Self::at(get_data_path()?))
    }

    /// Open the store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StateStore for JsonStore {
    fn load(&self) -> Result<Option<TrackerState>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state: TrackerState = serde_json::from_str(&content)?;
        Ok(Some(state.validated()?))
    }

    fn save(&self, state: &TrackerState) -> Result<()> {
        let json = record_json(state)?;
        // Write beside the target and swap it in so a crash never leaves half a record
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn discard(&self) -> Result<()> {
        for path in [self.path.clone(), self.temp_path()] {
            match fs::remove_file(&path) {
                Ok(()) => log::info!("Removed {}", path.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Plant;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonStore {
        JsonStore::at(dir.path().join("water_data.json"))
    }

    fn sample() -> TrackerState {
        let mut state = TrackerState::new(
            60,
            Plant::Monstera,
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        );
        state.add_water(350);
        state.days_completed = 2;
        state
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), None);
    }

    #[test]
    fn test_save_writes_readable_json() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\n    \"current_intake\": 350"));
        assert!(content.contains("\"plant\": \"monstera\""));
        assert!(!store.temp_path().exists());

        assert_eq!(store.load().unwrap(), Some(sample()));
    }

    #[test]
    fn test_save_indents_with_four_spaces() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let weight_line = content.lines().find(|l| l.contains("\"weight\"")).unwrap();
        assert_eq!(weight_line, "    \"weight\": 60,");
        assert!(content.starts_with("{\n    \"weight\""));
    }

    #[test]
    fn test_unparsable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_out_of_range_weight_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut state = sample();
        state.weight = 500;
        fs::write(store.path(), serde_json::to_string(&state).unwrap()).unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn test_discard_removes_file_and_leftover_temp() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "corrupt").unwrap();
        fs::write(store.temp_path(), "partial").unwrap();

        store.discard().unwrap();

        assert!(!store.path().exists());
        assert!(!store.temp_path().exists());
        // Discarding nothing is fine
        store.discard().unwrap();
    }
}
