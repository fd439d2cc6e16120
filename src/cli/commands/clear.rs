use crate::errors::AppResult;
use std::io::{self, Write};

/// Erase the terminal and move the cursor home.
pub fn handle() -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(b"\x1b[2J\x1b[1;1H")?;
    stdout.flush()?;
    Ok(())
}
