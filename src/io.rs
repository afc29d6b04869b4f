//! File helpers for rendering Markdown documents.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    cache::RenderCache,
    render::{render, render_cached},
};

/// Render the Markdown file at `path`.
///
/// With a cache, the file's path is used as the cache key.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn render_file(path: &Path, cache: Option<&dyn RenderCache>) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(match cache {
        Some(cache) => {
            let key = path.to_string_lossy();
            render_cached(&text, Some(key.as_ref()), cache)
        }
        None => render(&text),
    })
}

/// Path of the HTML file written for `path`: same stem, `.html` extension.
#[must_use]
pub fn html_path(path: &Path) -> PathBuf {
    path.with_extension("html")
}

/// Render `path` and write the result next to it.
///
/// Returns the path of the written file.
///
/// # Errors
/// Returns an error if `path` already has an `.html` extension, or if
/// reading the source or writing the output fails.
pub fn write_html(path: &Path, cache: Option<&dyn RenderCache>) -> io::Result<PathBuf> {
    let target = html_path(path);
    if target == path {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("refusing to overwrite source {}", path.display()),
        ));
    }
    let html = render_file(path, cache)?;
    fs::write(&target, html)?;
    Ok(target)
}
