mod json;
#[cfg(test)]
mod memory;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::cycle::evaluate_day;
use crate::error::Result;
use crate::models::TrackerState;

pub use json::JsonStore;
#[cfg(test)]
pub use memory::MemoryStore;

/// Persistence operations for the tracker record
pub trait StateStore {
    /// Read the record. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<TrackerState>>;

    /// Replace the stored record with `state`
    fn save(&self, state: &TrackerState) -> Result<()>;

    /// Remove whatever is stored, including a partial or corrupt record
    fn discard(&self) -> Result<()>;
}

/// Serialize the record as JSON indented by four spaces
pub(crate) fn record_json(state: &TrackerState) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    state.serialize(&mut serializer)?;
    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Load the record, running first-run `setup` when there is none.
///
/// An unreadable or corrupt record is deleted and replaced by a fresh one
/// from `setup`. A loaded record is rolled over to `today` and saved again if
/// that changed it.
pub fn load_or_setup<F>(store: &dyn StateStore, today: NaiveDate, setup: F) -> Result<TrackerState>
where
    F: FnOnce(NaiveDate) -> Result<TrackerState>,
{
    match store.load() {
        Ok(Some(mut state)) => {
            let outcome = evaluate_day(&mut state, today);
            if outcome.changed() {
                log::info!("New day on load: {:?}", outcome);
                store.save(&state)?;
            }
            return Ok(state);
        }
        Ok(None) => log::info!("No tracker record found, running first-run setup"),
        Err(e) => {
            log::warn!("Discarding unreadable tracker record: {}", e);
            store.discard()?;
        }
    }

    let state = setup(today)?;
    store.save(&state)?;
    Ok(state)
}
