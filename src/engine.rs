use crate::error::DumpError;
use crate::options::CollectorOptions;
use crate::output;
use crate::types::{DumpSummary, FileEntry, ReadOutcome};
use ignore::{DirEntry, WalkBuilder};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &CollectorOptions) -> Result<Self, DumpError> {
        check_root(&options.root)?;
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links);
        let by_name = options.sort_entries;
        builder.sort_by_file_path(move |a, b| walk_order(a, b, by_name));
        let ignore_dirs = options.ignore_dirs.clone();
        builder.filter_entry(move |entry| !is_pruned(entry, &ignore_dirs));
        Ok(Self {
            inner: builder.build(),
        })
    }
}
fn check_root(root: &Path) -> Result<(), DumpError> {
    let metadata = fs::metadata(root)
        .map_err(|e| DumpError::InvalidPath(format!("{}: {}", root.display(), e)))?;
    if !metadata.is_dir() {
        return Err(DumpError::InvalidPath(format!(
            "{}: not a directory",
            root.display()
        )));
    }
    fs::read_dir(root).map_err(|e| DumpError::io(root, e))?;
    Ok(())
}
// A directory's files come before its subdirectories. Siblings of the same
// kind keep filesystem order unless sorted by name.
fn walk_order(a: &Path, b: &Path, by_name: bool) -> Ordering {
    let kind = a.is_dir().cmp(&b.is_dir());
    if by_name {
        kind.then_with(|| a.file_name().cmp(&b.file_name()))
    } else {
        kind
    }
}
// The root is never pruned, whatever its name.
fn is_pruned(entry: &DirEntry, ignore_dirs: &BTreeSet<String>) -> bool {
    let pruned = entry.depth() > 0
        && entry.file_type().is_some_and(|ft| ft.is_dir())
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignore_dirs.contains(name));
    #[cfg(feature = "logging")]
    {
        if pruned {
            tracing::trace!("Pruning directory: {}", entry.path().display());
        }
    }
    pruned
}
/// Returns true when a file with this name belongs in the output document.
///
/// The name must end with one of the configured suffixes and must not contain
/// the excluded filename.
pub fn is_eligible(file_name: &str, options: &CollectorOptions) -> bool {
    if let Some(excluded) = options.excluded_file.as_deref() {
        if file_name.contains(excluded) {
            return false;
        }
    }
    options
        .extensions
        .iter()
        .any(|ext| file_name.ends_with(ext.as_str()))
}
fn read_file_content(path: &Path) -> ReadOutcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return ReadOutcome::Failed(e.to_string()),
    };
    match String::from_utf8(bytes) {
        Ok(content) => ReadOutcome::Text(content),
        Err(e) => ReadOutcome::Failed(e.to_string()),
    }
}
fn display_path(root: &Path, path: &Path) -> PathBuf {
    let relative = path.strip_prefix(root).unwrap_or(path);
    Path::new(".").join(relative)
}
/// Lazily yields every eligible file under the root, in walk order.
pub struct CollectorStream {
    walk: ignore::Walk,
    options: CollectorOptions,
    excluded_path: Option<PathBuf>,
}
impl CollectorStream {
    pub fn new(options: CollectorOptions) -> Result<Self, DumpError> {
        #[cfg(feature = "logging")]
        tracing::debug!("Starting walk at root: {}", options.root.display());
        let walker = Walker::new(&options)?;
        Ok(Self {
            walk: walker.inner,
            options,
            excluded_path: None,
        })
    }
    /// Never yield the file at `path`. Used to keep the output file out of itself.
    pub fn exclude_path(mut self, path: &Path) -> Result<Self, DumpError> {
        let canonical = fs::canonicalize(path).map_err(|e| DumpError::io(path, e))?;
        self.excluded_path = Some(canonical);
        Ok(self)
    }
    fn is_excluded_path(&self, path: &Path) -> bool {
        let Some(excluded) = &self.excluded_path else {
            return false;
        };
        if path.file_name() != excluded.file_name() {
            return false;
        }
        fs::canonicalize(path).is_ok_and(|p| &p == excluded)
    }
}
impl Iterator for CollectorStream {
    type Item = FileEntry;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable entry: {}", _e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !is_eligible(&name, &self.options) || self.is_excluded_path(path) {
                continue;
            }
            let outcome = read_file_content(path);
            #[cfg(feature = "logging")]
            {
                match &outcome {
                    ReadOutcome::Text(content) => {
                        tracing::debug!("Collected {} ({} bytes)", path.display(), content.len())
                    }
                    ReadOutcome::Failed(reason) => {
                        tracing::warn!("Failed to read {}: {}", path.display(), reason)
                    }
                }
            }
            return Some(FileEntry {
                path: path.to_path_buf(),
                display_path: display_path(&self.options.root, path),
                outcome,
            });
        }
    }
}
/// Collects every eligible file into memory.
pub fn collect(options: CollectorOptions) -> Result<Vec<FileEntry>, DumpError> {
    Ok(CollectorStream::new(options)?.collect())
}
/// Streams the output document for `options` into `writer`.
pub fn collect_into<W: Write>(
    options: CollectorOptions,
    writer: &mut W,
) -> Result<DumpSummary, DumpError> {
    let stream = CollectorStream::new(options)?;
    write_stream(stream, writer).map_err(DumpError::Write)
}
/// Writes the output document to `options.output_path`, truncating it first.
///
/// The output file itself is never collected, so repeated runs over an
/// unchanged tree produce identical bytes.
pub fn dump(options: CollectorOptions) -> Result<DumpSummary, DumpError> {
    let output_path = options.output_path.clone();
    let stream = CollectorStream::new(options)?;
    let file = File::create(&output_path).map_err(|e| DumpError::io(&output_path, e))?;
    let stream = stream.exclude_path(&output_path)?;
    let mut writer = BufWriter::new(file);
    let mut summary =
        write_stream(stream, &mut writer).map_err(|e| DumpError::io(&output_path, e))?;
    writer
        .flush()
        .map_err(|e| DumpError::io(&output_path, e))?;
    summary.output_path = Some(output_path);
    #[cfg(feature = "logging")]
    tracing::info!(
        "Wrote {} files ({} read errors)",
        summary.files_written,
        summary.read_errors
    );
    Ok(summary)
}
fn write_stream<W: Write>(stream: CollectorStream, writer: &mut W) -> io::Result<DumpSummary> {
    let mut summary = DumpSummary::default();
    for entry in stream {
        output::write_entry(writer, &entry)?;
        summary.files_written += 1;
        if entry.outcome.is_failed() {
            summary.read_errors += 1;
        }
    }
    Ok(summary)
}
