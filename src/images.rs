//! Image paragraphs.
//!
//! A block holding `![label](src)` is wrapped in an `image-wrapper` `<div>`
//! instead of a paragraph. Only the first image in the block becomes an
//! `<img>` tag; later ones are left for the anchor pass.

use std::sync::LazyLock;

use regex::Regex;

use crate::matcher::{group, replace_first};

static IMAGE_RE: LazyLock<Regex> =
    lazy_regex!(r"!\[([^\]]+)\]\(([^)]+)\)", "valid image regex");

/// Render `block` as an image paragraph.
///
/// Returns `None` when `block` contains no image.
///
/// # Examples
///
/// ```
/// use mdhtml::images::parse_image;
/// assert_eq!(
///     parse_image("see ![logo](logo.png)").as_deref(),
///     Some("<div class=\"image-wrapper\">see <img src=\"logo.png\" alt=\"logo\" /></div>")
/// );
/// ```
#[must_use]
pub fn parse_image(block: &str) -> Option<String> {
    let inner = replace_first(&IMAGE_RE, block, |caps| {
        format!(
            "<img src=\"{}\" alt=\"{}\" />",
            group(caps, 2),
            group(caps, 1)
        )
    })?;
    Some(format!("<div class=\"image-wrapper\">{inner}</div>"))
}
