//! The rendering pipeline.

use tracing::{debug, warn};

use crate::{
    blocks::parse_blocks,
    cache::RenderCache,
    inline::{anchors, bold, inline_code, italic},
};

/// Prefix added to every cache key.
pub const CACHE_NAMESPACE: &str = "mdhtml.render.";

/// Inline passes, applied in order over the block parser's output.
const INLINE_PASSES: [fn(&str) -> String; 4] = [bold, italic, anchors, inline_code];

/// Render a markdown document to HTML.
///
/// # Examples
///
/// ```
/// use mdhtml::render;
/// assert_eq!(render("Hello **world**!"), "<p>Hello <strong>world</strong>!</p>");
/// ```
#[must_use]
pub fn render(text: &str) -> String {
    INLINE_PASSES
        .iter()
        .fold(parse_blocks(text), |html, pass| pass(&html))
}

fn namespaced(key: &str) -> String {
    format!("{CACHE_NAMESPACE}{key}")
}

/// Render `text`, consulting `cache` when a `key` is given.
///
/// A cached entry is returned as is, without looking at `text`. On a miss
/// the output is rendered and stored. Cache failures are logged and treated
/// as misses.
///
/// # Examples
///
/// ```
/// use mdhtml::{MemoryCache, render_cached};
///
/// let cache = MemoryCache::new();
/// assert_eq!(render_cached("*hi*", Some("greeting"), &cache), "<p><i>hi</i></p>");
/// // The stored entry wins over new input under the same key.
/// assert_eq!(render_cached("changed", Some("greeting"), &cache), "<p><i>hi</i></p>");
/// ```
#[must_use]
pub fn render_cached<C>(text: &str, key: Option<&str>, cache: &C) -> String
where
    C: RenderCache + ?Sized,
{
    let Some(key) = key else {
        return render(text);
    };
    let key = namespaced(key);

    match cache.get(&key) {
        Ok(Some(hit)) => {
            debug!(%key, "render cache hit");
            return hit;
        }
        Ok(None) => debug!(%key, "render cache miss"),
        Err(err) => warn!(%key, error = %err, "render cache lookup failed"),
    }

    let html = render(text);
    if let Err(err) = cache.set(&key, &html) {
        warn!(%key, error = %err, "render cache store failed");
    }
    html
}
