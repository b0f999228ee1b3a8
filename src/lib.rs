//! # ctxdump
//!
//! `ctxdump` walks a project tree and concatenates the text of every file with a
//! wanted extension into one document, ready to paste into an LLM chat as context.
//!
//! Directories named in the ignore set (`node_modules`, `.git`, `build`, ...) are
//! pruned at every depth and `package-lock.json` is always skipped. Each file
//! becomes a section headed by its path relative to the root. A file that
//! cannot be read as UTF-8 gets an inline `[Error reading file: ...]`
//! placeholder and the run carries on.
//!
//! # Features
//!
//! - `logging` (default): Emits `tracing` events and lets the binary install a subscriber.
//!
//! # Example
//!
//! ```no_run
//! use ctxdump::{CollectorBuilder, dump};
//!
//! let options = CollectorBuilder::new(".")
//!     .extensions([".rs", ".toml"])
//!     .output_path("context.txt")
//!     .build();
//!
//! let summary = dump(options).expect("Failed to write context");
//! println!("{} files, {} unreadable", summary.files_written, summary.read_errors);
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{CollectorStream, collect, collect_into, dump, is_eligible};
pub use error::DumpError;
pub use options::{
    CollectorBuilder, CollectorOptions, DEFAULT_EXCLUDED_FILE, DEFAULT_EXTENSIONS,
    DEFAULT_IGNORE_DIRS, DEFAULT_OUTPUT_PATH,
};
pub use types::{DumpSummary, FileEntry, ReadOutcome};
