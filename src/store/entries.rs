use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;

/// Date-sorted collection owning every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from entries in any order. Equal dates keep their
    /// relative order.
    pub fn from_entries(mut entries: Vec<Entry>) -> Self {
        entries.sort_by_key(|e| e.date);
        Self { entries }
    }

    /// Insert keeping the date order; goes after existing entries of the
    /// same date. Returns the 1-based position of the new entry.
    pub fn add(&mut self, entry: Entry) -> usize {
        let pos = self.entries.partition_point(|e| e.date <= entry.date);
        self.entries.insert(pos, entry);
        pos + 1
    }

    /// Remove the entry at the 1-based `index` shown by `list -b`.
    pub fn remove(&mut self, index: usize) -> AppResult<Entry> {
        if index == 0 || index > self.entries.len() {
            return Err(AppError::InvalidIndex(index));
        }
        Ok(self.entries.remove(index - 1))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
