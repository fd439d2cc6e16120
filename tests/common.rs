#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use hourlog::models::entry::Entry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hl() -> Command {
    cargo_bin_cmd!("hourlog")
}

/// `hourlog --test --data <file>` with the config file ignored
pub fn hl_with(data_file: &str) -> Command {
    let mut cmd = hl();
    cmd.args(["--test", "--data", data_file]);
    cmd
}

/// Create a unique entries file path inside the system temp dir and remove any existing file
pub fn setup_data_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hourlog_entries.txt", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hourlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn date(m: u32, d: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Entry from a `MM/DD/YYYY` date
pub fn entry(hours: u32, minutes: u32, mdy: &str) -> Entry {
    let d = NaiveDate::parse_from_str(mdy, "%m/%d/%Y").expect("valid test date");
    Entry::new(d, hours, minutes)
}

/// Write an entries file with the given raw contents
pub fn seed_data_file(name: &str, contents: &str) -> String {
    let p = setup_data_file(name);
    fs::write(&p, contents).expect("seed entries file");
    p
}
