use crate::errors::AppResult;
use crate::store::{EntryStore, file};
use crate::ui::messages::success;
use crate::utils::date::{STORE_DATE_FORMAT, format_date};
use std::path::Path;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the entry at the 1-based `index` and persist the store.
    /// An out-of-range index leaves store and file untouched.
    pub fn apply(store: &mut EntryStore, path: &Path, index: usize) -> AppResult<()> {
        let mut next = store.clone();
        let entry = next.remove(index)?;
        file::save(path, &next)?;
        *store = next;

        success(format!(
            "Entry removed: {} hours {} minutes on {}",
            entry.hours,
            entry.minutes,
            format_date(entry.date, STORE_DATE_FORMAT)
        ));
        Ok(())
    }
}
