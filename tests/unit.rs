use ctxdump::{
    is_eligible,
    output,
    CollectorBuilder,
    CollectorOptions,
    DumpError,
    FileEntry,
    ReadOutcome,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
fn entry(display: &str, outcome: ReadOutcome) -> FileEntry {
    FileEntry {
        path: PathBuf::from(display),
        display_path: PathBuf::from(display),
        outcome,
    }
}
#[test]
fn test_default_extensions_are_eligible() {
    let options = CollectorOptions::default();
    for name in ["main.py", "data.json", "README.md", "notes.txt", "rows.csv", "app.ts", "Page.tsx", "index.js", "App.jsx", "site.css", "schema.sql"] {
        assert!(is_eligible(name, &options), "{} should be eligible", name);
    }
    for name in ["main.rs", "Cargo.toml", "image.png", "Makefile", "json"] {
        assert!(!is_eligible(name, &options), "{} should not be eligible", name);
    }
}
#[test]
fn test_excluded_file_matches_anywhere_in_name() {
    let options = CollectorOptions::default();
    assert!(!is_eligible("package-lock.json", &options));
    assert!(!is_eligible("old-package-lock.json", &options));
    assert!(!is_eligible("package-lock.json.txt", &options));
    assert!(is_eligible("package.json", &options));
    assert!(is_eligible("package-lock.md", &options));
}
#[test]
fn test_excluded_file_can_be_disabled() {
    let options = CollectorBuilder::new(".").excluded_file(None).build();
    assert!(is_eligible("package-lock.json", &options));
}
#[test]
fn test_suffix_match_is_not_extension_parse() {
    let options = CollectorBuilder::new(".").extensions(["rc.json"]).build();
    assert!(is_eligible(".eslintrc.json", &options));
    assert!(!is_eligible("tsconfig.json", &options));
}
#[test]
fn test_header_layout() {
    let header = output::format_header(Path::new("./src/app.ts"));
    assert_eq!(
        header,
        "\n\n====================\nFILE: ./src/app.ts\n====================\n\n"
    );
}
#[test]
fn test_read_failure_placeholder() {
    let section = output::format_entry(&entry(
        "./bad.txt",
        ReadOutcome::Failed("stream did not contain valid UTF-8".into()),
    ));
    assert!(section.ends_with("[Error reading file: stream did not contain valid UTF-8]"));
}
#[test]
fn test_document_has_no_trailing_separator() {
    let doc = output::format_document(&[
        entry("./a.py", ReadOutcome::Text("hello".into())),
        entry("./b.txt", ReadOutcome::Text("world".into())),
    ]);
    assert!(doc.starts_with("\n\n===================="));
    assert!(doc.ends_with("\n\nworld"));
    let mut streamed = Vec::new();
    output::write_entry(&mut streamed, &entry("./a.py", ReadOutcome::Text("hello".into()))).unwrap();
    output::write_entry(&mut streamed, &entry("./b.txt", ReadOutcome::Text("world".into()))).unwrap();
    assert_eq!(String::from_utf8(streamed).unwrap(), doc);
}
#[test]
fn test_config_file_overrides_named_fields_only() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("ctxdump.json");
    fs::write(&config, r#"{ "extensions": [".rs"], "sort_entries": true }"#).unwrap();
    let options = CollectorOptions::from_json_file(&config).unwrap();
    let defaults = CollectorOptions::default();
    assert_eq!(options.extensions, vec![".rs".to_string()]);
    assert!(options.sort_entries);
    assert_eq!(options.ignore_dirs, defaults.ignore_dirs);
    assert_eq!(options.excluded_file, defaults.excluded_file);
    assert_eq!(options.output_path, defaults.output_path);
}
#[test]
fn test_config_file_rejects_bad_json() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("ctxdump.json");
    fs::write(&config, "{ extensions: ").unwrap();
    let err = CollectorOptions::from_json_file(&config).unwrap_err();
    assert!(matches!(err, DumpError::Config(_)));
}
