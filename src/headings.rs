//! ATX heading rendering.
//!
//! Lines made of one to six `#` characters, whitespace and a title become
//! `<h1>`..`<h6>` elements. Other lines in the same block pass through
//! untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::matcher::{group, replace_all};

static HEADING_RE: LazyLock<Regex> =
    lazy_regex!(r"(?m)^(#{1,6})[ \t]+(.+)", "valid heading regex");

/// Render every heading line in `block`.
///
/// Returns `None` when no line of `block` is a heading.
///
/// # Examples
///
/// ```
/// use mdhtml::headings::parse_header;
/// assert_eq!(parse_header("## Usage").as_deref(), Some("<h2>Usage</h2>"));
/// assert_eq!(parse_header("#hashtag"), None);
/// ```
#[must_use]
pub fn parse_header(block: &str) -> Option<String> {
    replace_all(&HEADING_RE, block, |caps| {
        let level = group(caps, 1).len();
        format!("<h{level}>{}</h{level}>", group(caps, 2))
    })
}
