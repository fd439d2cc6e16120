use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{EntryStore, file};

/// Persist the store before the shell stops.
pub fn handle(cfg: &Config, store: &EntryStore) -> AppResult<()> {
    file::save(&cfg.data_path(), store)
}
