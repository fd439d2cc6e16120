//! Whole-file writes that never leave a half-written target behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `contents` to a sibling temp file, then rename it over `path`.
/// Missing parent directories are created.
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    let result = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if result.is_err() {
        fs::remove_file(&tmp).ok();
    }

    debug!(path = %path.display(), bytes = contents.len(), ok = result.is_ok(), "atomic write");
    result
}
