pub mod add;
pub mod clear;
pub mod config;
pub mod exit;
pub mod list;
pub mod remove;
pub mod shell;
