use crate::models::week::WeekStart;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for hourlog
/// Work-hours logging shell with weekly grid reports
#[derive(Parser, Debug)]
#[command(
    name = "hourlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log daily work hours and print weekly grid reports. Run without a command to start the shell.",
    long_about = None
)]
pub struct Cli {
    /// Override the entries file path (useful for tests or a second log)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Override the configured first day of the week
    #[arg(global = true, long = "week-start", value_enum)]
    pub week_start: Option<WeekStart>,

    /// Print diagnostic traces to stderr
    #[arg(global = true, long = "log")]
    pub log: bool,

    /// Run in test mode (configuration file is ignored)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One line typed at the shell prompt.
#[derive(Parser, Debug)]
#[command(
    name = "hourlog",
    no_binary_name = true,
    disable_version_flag = true,
    long_about = None
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new entry (e.g. add 2 30 01/15/2022)
    Add {
        /// Whole hours worked
        hours: u32,

        /// Extra minutes worked (0-59)
        #[arg(value_parser = clap::value_parser!(u32).range(0..60))]
        minutes: u32,

        /// Work date (MM/DD/YYYY)
        date: String,

        /// Do not print a confirmation (legacy spelling: -nv)
        #[arg(short = 'q', long = "quiet")]
        quiet: bool,
    },

    /// Remove an entry by the number shown in `list -b`
    #[command(visible_alias = "rm")]
    Remove {
        /// 1-based entry number
        index: usize,
    },

    /// List all entries as weekly tables
    #[command(visible_alias = "ls")]
    List {
        #[arg(short = 'b', long = "basic", help = "Flat listing instead of weekly tables")]
        basic: bool,

        #[arg(
            short = 'o',
            long = "output",
            value_name = "FILE",
            help = "Write the report as an HTML page instead of printing it"
        )]
        output: Option<PathBuf>,
    },

    /// Clear the screen
    #[command(visible_alias = "clr")]
    Clear,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Create the configuration file with default values")]
        init: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Save and leave the shell
    #[command(visible_aliases = ["quit", "q"])]
    Exit,
}

/// Map the historical single-dash spellings onto the current flags.
pub fn normalize_legacy_flags<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tokens
        .into_iter()
        .map(Into::into)
        .map(|t| match t.as_str() {
            "-nv" => "--quiet".to_string(),
            "-output" => "--output".to_string(),
            _ => t,
        })
        .collect()
}
