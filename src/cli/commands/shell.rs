//! Interactive prompt: every line is parsed with the same grammar as the
//! one-shot command line.

use crate::cli::Flow;
use crate::cli::parser::{ShellLine, normalize_legacy_flags};
use crate::config::Config;
use crate::dispatch;
use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use crate::ui::messages::{error, info};
use clap::Parser;
use clap::error::ErrorKind;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "> ";

/// Run the shell on stdin until `exit` or end of input.
pub fn run(cfg: &Config, store: &mut EntryStore) -> AppResult<()> {
    info("Type 'help' to see the available commands.");
    run_with(io::stdin().lock(), cfg, store)
}

pub fn run_with<R: BufRead>(mut input: R, cfg: &Config, store: &mut EntryStore) -> AppResult<()> {
    let mut buf = Vec::new();

    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            println!();
            return Ok(());
        }
        // undecodable bytes become U+FFFD and fail as an unknown command
        let line = String::from_utf8_lossy(&buf);

        let tokens = normalize_legacy_flags(line.split_whitespace());
        if tokens.is_empty() {
            continue;
        }
        debug!(?tokens, "shell command");

        let parsed = match ShellLine::try_parse_from(&tokens) {
            Ok(p) => p,
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                e.print()?;
                continue;
            }
            Err(e) => {
                // aborted before dispatch, nothing changes
                error(AppError::from(e));
                continue;
            }
        };

        match dispatch(&parsed.command, cfg, store) {
            Ok(Flow::Exit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(e) => error(e),
        }
    }
}
