//! Output document layout.
//!
//! Every collected file becomes one section:
//!
//! ```text
//! \n\n====================\nFILE: <path>\n====================\n\n<content>
//! ```
//!
//! Sections are concatenated with nothing in between and nothing after the
//! last one. Downstream consumers split on this layout, so it must stay byte-exact.

use crate::types::{FileEntry, ReadOutcome};
use std::io::{self, Write};
use std::path::Path;

/// Delimiter line framing each `FILE:` header.
pub const DELIMITER: &str = "====================";

/// Formats the header that precedes a file's content.
pub fn format_header(display_path: &Path) -> String {
    format!(
        "\n\n{}\nFILE: {}\n{}\n\n",
        DELIMITER,
        display_path.display(),
        DELIMITER
    )
}

/// Placeholder written instead of content when a file could not be read.
pub fn format_read_error(description: &str) -> String {
    format!("[Error reading file: {}]", description)
}

/// Formats one complete section.
pub fn format_entry(entry: &FileEntry) -> String {
    let mut out = format_header(&entry.display_path);
    match &entry.outcome {
        ReadOutcome::Text(content) => out.push_str(content),
        ReadOutcome::Failed(description) => out.push_str(&format_read_error(description)),
    }
    out
}

/// Formats a whole document from already collected entries.
pub fn format_document(entries: &[FileEntry]) -> String {
    entries.iter().map(format_entry).collect()
}

/// Writes one section to `writer` without building it in memory first.
pub fn write_entry<W: Write>(writer: &mut W, entry: &FileEntry) -> io::Result<()> {
    writer.write_all(format_header(&entry.display_path).as_bytes())?;
    match &entry.outcome {
        ReadOutcome::Text(content) => writer.write_all(content.as_bytes()),
        ReadOutcome::Failed(description) => {
            writer.write_all(format_read_error(description).as_bytes())
        }
    }
}
