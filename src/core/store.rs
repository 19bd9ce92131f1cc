use anyhow::Result;
use std::cell::RefCell;

use crate::models::entry::Entry;

/// Persistence contract for the entry collection.
///
/// Callers always hand over the complete collection; there are no partial writes.
pub trait EntryStore {
    /// The full collection. Unreadable data is recovered or replaced by an
    /// empty collection inside the store; this never fails.
    fn load(&self) -> Vec<Entry>;

    /// Replace the stored collection. On error the previous data is kept.
    fn save(&self, entries: &[Entry]) -> Result<()>;
}

/// Store that keeps the collection in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<Vec<Entry>>,
}

impl MemoryStore {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries: RefCell::new(entries),
        }
    }
}

impl EntryStore for MemoryStore {
    fn load(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}
