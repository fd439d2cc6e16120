use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::store::{EntryStore, file};
use crate::ui::messages::{success, warning};
use crate::utils::date::{STORE_DATE_FORMAT, format_date};
use std::path::Path;
use tracing::debug;

pub struct AddLogic;

impl AddLogic {
    /// Insert `entry`, persist the store and confirm unless `quiet`.
    pub fn apply(store: &mut EntryStore, path: &Path, entry: Entry, quiet: bool) -> AppResult<()> {
        if entry.total_minutes() == 0 {
            warning("Adding an entry with a zero duration.");
        }

        // the in-memory store only changes once the file is written
        let mut next = store.clone();
        let position = next.add(entry);
        file::save(path, &next)?;
        *store = next;
        debug!(position, date = %entry.date, "entry added");

        if !quiet {
            success(format!(
                "Entry added: {} hours {} minutes on {}",
                entry.hours,
                entry.minutes,
                format_date(entry.date, STORE_DATE_FORMAT)
            ));
        }
        Ok(())
    }
}
