use std::cell::RefCell;

use crate::error::Result;
use crate::models::TrackerState;

use super::{StateStore, record_json};

/// In-memory store holding the serialized record (for testing)
#[derive(Default)]
pub struct MemoryStore {
    raw: RefCell<Option<String>>,
    pub saves: RefCell<usize>,
}

impl MemoryStore {
    /// Start with arbitrary stored content, e.g. a corrupt record
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: RefCell::new(Some(raw.to_string())),
            saves: RefCell::new(0),
        }
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<TrackerState>> {
        match self.raw.borrow().as_deref() {
            Some(raw) => {
                let state: TrackerState = serde_json::from_str(raw)?;
                Ok(Some(state.validated()?))
            }
            None => Ok(None),
        }
    }

    fn save(&self, state: &TrackerState) -> Result<()> {
        *self.raw.borrow_mut() = Some(record_json(state)?);
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn discard(&self) -> Result<()> {
        *self.raw.borrow_mut() = None;
        Ok(())
    }
}
