// src/export/html.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::utils::fs::write_atomic;
use std::path::Path;

/// Wrap a composed report in the fixed HTML page: the text goes verbatim
/// into a monospace `<pre>` block. Only the title is escaped.
pub fn wrap_html(title: &str, body: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"
<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <style>
        pre {{
            font-family: "Cascadia Mono", "Courier New", monospace;
        }}
    </style>
</head>
<body>
    <pre>
{body}
    </pre>
</body>
</html>
"#
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Write the report as an HTML page to `path`.
pub fn export_html(path: &Path, title: &str, body: &str) -> AppResult<()> {
    write_atomic(path, &wrap_html(title, body))?;
    notify_export_success("HTML", path);
    Ok(())
}
