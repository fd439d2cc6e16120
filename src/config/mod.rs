use crate::errors::{AppError, AppResult};
use crate::models::week::WeekStart;
use crate::utils::date::is_valid_format;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_full_date_format")]
    pub full_date_format: String,
    #[serde(default = "default_short_date_format")]
    pub short_date_format: String,
    #[serde(default = "default_html_title")]
    pub html_title: String,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("time_entries.txt")
        .to_string_lossy()
        .to_string()
}
fn default_full_date_format() -> String {
    "%m/%d/%Y".to_string()
}
fn default_short_date_format() -> String {
    "%m/%d".to_string()
}
fn default_html_title() -> String {
    "Your Output".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            week_start: WeekStart::default(),
            full_date_format: default_full_date_format(),
            short_date_format: default_short_date_format(),
            html_title: default_html_title(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hourlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".hourlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hourlog.conf")
    }

    /// Store file path with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration file: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Reject date formats chrono cannot render.
    pub fn validate(&self) -> AppResult<()> {
        for (name, fmt) in [
            ("full_date_format", &self.full_date_format),
            ("short_date_format", &self.short_date_format),
        ] {
            if !is_valid_format(fmt) {
                return Err(AppError::Config(format!("{name}: invalid date format '{fmt}'")));
            }
        }
        Ok(())
    }

    /// Write the default configuration file unless one already exists.
    /// Returns false when the file was already there.
    pub fn init_file() -> AppResult<bool> {
        let path = Self::config_file();
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = Self::default().to_yaml()?;
        fs::write(&path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(true)
    }
}
