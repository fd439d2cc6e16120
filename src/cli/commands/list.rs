use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::store::EntryStore;

pub fn handle(cmd: &Commands, cfg: &Config, store: &EntryStore) -> AppResult<()> {
    if let Commands::List { basic, output } = cmd {
        ReportLogic::list(store, cfg, *basic, output.as_deref())?;
    }
    Ok(())
}
