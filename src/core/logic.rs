use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{EntryStore, file};
use crate::ui::messages::info;

pub struct Core;

impl Core {
    /// Load the configured store; a missing file starts an empty one.
    pub fn open_store(cfg: &Config) -> AppResult<EntryStore> {
        match file::load(&cfg.data_path())? {
            Some(store) => Ok(store),
            None => {
                info("No saved entries found.");
                Ok(EntryStore::new())
            }
        }
    }
}
