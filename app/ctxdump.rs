//! Command-line interface for ctxdump.
//!
//! Walks a project tree and writes every matching text file into a single
//! context document.

use clap::{ArgAction, Parser};
use ctxdump::{CollectorBuilder, CollectorOptions, DumpError, dump};
use std::path::PathBuf;
use std::process::exit;

/// ctxdump — dump a project's text files into one context document
#[derive(Parser)]
#[command(name = "ctxdump", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    root: Option<PathBuf>,

    /// Output file (default project_full_context.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File suffix to include (can be repeated; replaces the defaults)
    #[arg(short = 'e', long = "ext")]
    extensions: Vec<String>,

    /// Directory name to prune (can be repeated; replaces the defaults)
    #[arg(short = 'I', long = "ignore-dir")]
    ignore_dirs: Vec<String>,

    /// File name to always skip
    #[arg(long, conflicts_with = "no_exclude_file")]
    exclude_file: Option<String>,

    /// Do not skip any file by name
    #[arg(long)]
    no_exclude_file: bool,

    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sort siblings by name for deterministic output
    #[arg(long)]
    sort: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_options(self) -> Result<CollectorOptions, DumpError> {
        let base = match &self.config {
            Some(path) => CollectorOptions::from_json_file(path)?,
            None => CollectorOptions::default(),
        };
        let mut builder = CollectorBuilder::from_options(base);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if let Some(output) = self.output {
            builder = builder.output_path(output);
        }
        if !self.extensions.is_empty() {
            builder = builder.extensions(self.extensions);
        }
        if !self.ignore_dirs.is_empty() {
            builder = builder.ignore_dirs(self.ignore_dirs);
        }
        if self.no_exclude_file {
            builder = builder.excluded_file(None);
        } else if let Some(name) = self.exclude_file {
            builder = builder.excluded_file(Some(name));
        }
        if self.sort {
            builder = builder.sort_entries(true);
        }
        if self.follow_links {
            builder = builder.follow_links(true);
        }
        Ok(builder.build())
    }
}

#[cfg(feature = "logging")]
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "ctxdump=warn",
        1 => "ctxdump=info",
        2 => "ctxdump=debug",
        _ => "ctxdump=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_tracing(cli.verbose);

    let options = match cli.into_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let extensions: Vec<String> = options
        .extensions
        .iter()
        .map(|ext| format!("'{}'", ext))
        .collect();
    println!(
        "Scanning for files with extensions: [{}]",
        extensions.join(", ")
    );
    let output_path = options.output_path.clone();
    if let Err(e) = dump(options) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!("Done! Upload '{}' to the chat.", output_path.display());
}
