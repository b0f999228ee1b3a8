use crate::error::DumpError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffixes collected when no extension list is given.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".json", ".md", ".txt", ".csv", ".ts", ".tsx", ".js", ".jsx", ".css", ".sql",
];

/// Directory names pruned at every depth when no ignore set is given.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "venv",
    "env",
    ".idea",
    ".vscode",
    ".next",
    "node_modules",
    "dist",
    "build",
];

pub const DEFAULT_EXCLUDED_FILE: &str = "package-lock.json";

pub const DEFAULT_OUTPUT_PATH: &str = "project_full_context.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorOptions {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub ignore_dirs: BTreeSet<String>,
    pub excluded_file: Option<String>,
    pub output_path: PathBuf,
    pub follow_links: bool,
    pub sort_entries: bool,
}
impl Default for CollectorOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            excluded_file: Some(DEFAULT_EXCLUDED_FILE.to_string()),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            follow_links: false,
            sort_entries: false,
        }
    }
}
impl CollectorOptions {
    /// Loads options from a JSON file. Fields missing from the file keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DumpError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| DumpError::io(path, e))?;
        serde_json::from_str(&raw)
            .map_err(|e| DumpError::Config(format!("{}: {}", path.display(), e)))
    }
}
#[derive(Debug, Default)]
pub struct CollectorBuilder {
    options: CollectorOptions,
}
impl CollectorBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CollectorOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    /// Starts from existing options, e.g. ones loaded from a config file.
    pub fn from_options(options: CollectorOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
    pub fn ignore_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.ignore_dirs = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn excluded_file(mut self, name: Option<String>) -> Self {
        self.options.excluded_file = name;
        self
    }
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_path = path.into();
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn sort_entries(mut self, yes: bool) -> Self {
        self.options.sort_entries = yes;
        self
    }
    pub fn build(self) -> CollectorOptions {
        self.options
    }
}
