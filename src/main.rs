use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use mdhtml::{DirCache, RenderCache, render, render_cached, render_file, write_html};
use rayon::prelude::*;
use tracing::debug;

#[derive(Parser)]
#[command(version, about = "Render markdown to HTML")]
struct Cli {
    /// Write `<name>.html` next to each input instead of printing
    #[arg(long, requires = "files")]
    write: bool,
    /// Directory used to cache rendered output between runs
    #[arg(long = "cache-dir", value_name = "DIR")]
    cache_dir: Option<PathBuf>,
    /// Cache key for markdown read from standard input; files are keyed by path
    #[arg(
        long = "cache-key",
        value_name = "KEY",
        requires = "cache_dir",
        conflicts_with = "files"
    )]
    cache_key: Option<String>,
    /// Log debugging information to standard error
    #[arg(short, long)]
    verbose: bool,
    /// Markdown files to render
    files: Vec<PathBuf>,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}

/// Render one input file, either returning its HTML or writing it to disk.
fn process_path(
    path: &Path,
    write: bool,
    cache: Option<&dyn RenderCache>,
) -> anyhow::Result<Option<String>> {
    if write {
        let target = write_html(path, cache)
            .with_context(|| format!("failed to render {}", path.display()))?;
        debug!(source = %path.display(), target = %target.display(), "wrote html");
        return Ok(None);
    }
    let html =
        render_file(path, cache).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Some(html))
}

/// Entry point for the command-line renderer.
///
/// Without file arguments the document is read from standard input and the
/// HTML printed to standard output. Files are rendered in parallel and
/// printed in argument order, or written beside their sources with
/// `--write`.
///
/// # Examples
///
/// ```sh
/// # Render a file to stdout
/// mdhtml notes.md
///
/// # Write notes.html and todo.html, reusing cached output
/// mdhtml --write --cache-dir .mdhtml-cache notes.md todo.md
///
/// # Render standard input
/// cat notes.md | mdhtml
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cache = cli
        .cache_dir
        .as_deref()
        .map(DirCache::create)
        .transpose()
        .context("failed to prepare cache directory")?;

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let html = match &cache {
            Some(cache) => render_cached(&input, cli.cache_key.as_deref(), cache),
            None => render(&input),
        };
        println!("{html}");
        return Ok(());
    }

    let results: Vec<anyhow::Result<Option<String>>> = cli
        .files
        .par_iter()
        .map(|path| {
            let cache = cache.as_ref().map(|c| c as &dyn RenderCache);
            process_path(path, cli.write, cache)
        })
        .collect();

    for result in results {
        if let Some(html) = result? {
            println!("{html}");
        }
    }

    Ok(())
}
