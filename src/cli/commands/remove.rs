use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::EntryStore;

pub fn handle(cmd: &Commands, cfg: &Config, store: &mut EntryStore) -> AppResult<()> {
    if let Commands::Remove { index } = cmd {
        DeleteLogic::apply(store, &cfg.data_path(), *index)?;
    }
    Ok(())
}
