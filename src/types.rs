use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What reading a collected file produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadOutcome {
    /// The whole file, decoded as UTF-8.
    Text(String),
    /// The file could not be read as text; holds the error description.
    Failed(String),
}

impl ReadOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ReadOutcome::Failed(_))
    }
}

/// A single file selected for the output document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// The path as produced by the walk (root-prefixed).
    pub path: PathBuf,
    /// The path written in the `FILE:` header, relative to the root and
    /// prefixed with `./`.
    pub display_path: PathBuf,
    pub outcome: ReadOutcome,
}

/// Counts reported once a run finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpSummary {
    /// Number of file sections written, failures included.
    pub files_written: usize,
    /// Number of sections that carry an error placeholder.
    pub read_errors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
}
