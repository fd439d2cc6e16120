use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::fs;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let path = Config::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            info(format!("Configuration file: {}", path.display()));
            println!("{}", content);
        } else {
            info("No configuration file, using defaults:");
            println!("{}", cfg.to_yaml()?);
        }
        Ok(())
    }

    pub fn init() -> AppResult<()> {
        let path = Config::config_file();
        if Config::init_file()? {
            success(format!("Config file: {}", path.display()));
        } else {
            info(format!("Config file already exists: {}", path.display()));
        }
        Ok(())
    }

    pub fn edit(editor: &Option<String>) -> AppResult<()> {
        Config::init_file()?;

        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(Config::config_file())
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{ed}': {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{ed}' exited with {status}")));
        }

        // surface mistakes right away instead of on the next command
        Config::load()?;
        Ok(())
    }
}
