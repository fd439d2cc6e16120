//! Flat-file persistence: one `hours minutes MM/DD/YYYY` line per entry.

use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::store::EntryStore;
use crate::utils::date::{STORE_DATE_FORMAT, format_date, parse_date};
use crate::utils::fs::write_atomic;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct StoredEntry {
    hours: u32,
    minutes: u32,
    date: String,
}

/// Parse store contents.
pub fn parse(contents: &str) -> AppResult<EntryStore> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut entries = Vec::new();
    for (n, record) in rdr.deserialize::<StoredEntry>().enumerate() {
        let rec = record?;
        let date = parse_date(&rec.date)
            .map_err(|_| AppError::Store(format!("record {}: invalid date '{}'", n + 1, rec.date)))?;
        entries.push(Entry::new(date, rec.hours, rec.minutes));
    }

    Ok(EntryStore::from_entries(entries))
}

/// Render the store in file format.
pub fn serialize(store: &EntryStore) -> String {
    store
        .entries()
        .iter()
        .map(|e| {
            format!(
                "{} {} {}\n",
                e.hours,
                e.minutes,
                format_date(e.date, STORE_DATE_FORMAT)
            )
        })
        .collect()
}

/// Load the store; a missing file is an empty store (`Ok(None)`).
pub fn load(path: &Path) -> AppResult<Option<EntryStore>> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "store file not found");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let store = parse(&contents)?;
    debug!(path = %path.display(), entries = store.len(), "store loaded");
    Ok(Some(store))
}

/// Overwrite the store file with the current contents.
pub fn save(path: &Path, store: &EntryStore) -> AppResult<()> {
    write_atomic(path, &serialize(store))?;
    debug!(path = %path.display(), entries = store.len(), "store saved");
    Ok(())
}
