use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        edit_config,
        editor,
    } = cmd
    {
        if *init {
            ConfigLogic::init()?;
        }

        if *edit_config {
            ConfigLogic::edit(editor)?;
        }

        if *print_config || !(*init || *edit_config) {
            ConfigLogic::print(cfg)?;
        }
    }
    Ok(())
}
