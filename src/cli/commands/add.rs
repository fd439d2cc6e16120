use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::store::EntryStore;
use crate::utils::date;

/// Add a new entry.
pub fn handle(cmd: &Commands, cfg: &Config, store: &mut EntryStore) -> AppResult<()> {
    if let Commands::Add {
        hours,
        minutes,
        date,
        quiet,
    } = cmd
    {
        let d = date::parse_date(date)?;
        AddLogic::apply(store, &cfg.data_path(), Entry::new(d, *hours, *minutes), *quiet)?;
    }

    Ok(())
}
