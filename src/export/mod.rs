// src/export/mod.rs

pub mod html;

pub use html::{export_html, wrap_html};

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for file exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
