//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store file
    // ---------------------------
    #[error("Store file error: {0}")]
    Store(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected MM/DD/YYYY)")]
    InvalidDate(String),

    #[error("Invalid options: {0}")]
    InvalidOption(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid index: {0}")]
    InvalidIndex(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        // csv already reports record/line positions in its message
        AppError::Store(e.to_string())
    }
}

impl From<clap::Error> for AppError {
    fn from(e: clap::Error) -> Self {
        let msg = e.to_string();
        AppError::InvalidOption(msg.trim_start_matches("error: ").trim_end().to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
