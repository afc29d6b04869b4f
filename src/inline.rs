//! Inline span rewriting.
//!
//! These passes run over the whole HTML produced by the block parser, in the
//! order [`bold`], [`italic`], [`anchors`], [`inline_code`]. Each one is a
//! plain text-to-text rewrite; emphasis never spans lines.

use std::sync::LazyLock;

use regex::Regex;

use crate::matcher::{group, rewrite_all};

static BOLD_RE: LazyLock<Regex> =
    lazy_regex!(r"\*\*(\S|\S.*?\S)\*\*", "valid bold regex");

// Italic runs after bold, so any `**` left over is literal text and must not
// open or close a span.
static ITALIC_RE: LazyLock<Regex> =
    lazy_regex!(r"\*([^\s*]|[^\s*].*?[^\s*])\*", "valid italic regex");

static ANCHOR_RE: LazyLock<Regex> =
    lazy_regex!(r"\[([^\]]+)\]\(([^)]+)\)", "valid anchor regex");

static CODE_REGION_RE: LazyLock<Regex> =
    lazy_regex!(r"(?s)<code[^>]*>.+?</code>", "valid code region regex");

static INLINE_CODE_RE: LazyLock<Regex> = lazy_regex!(r"`([^`]+)`", "valid inline code regex");

/// Wrap `**text**` in `<strong>`.
///
/// Markers with whitespace directly inside them are left alone.
///
/// # Examples
///
/// ```
/// use mdhtml::inline::bold;
/// assert_eq!(bold("a **b** c"), "a <strong>b</strong> c");
/// assert_eq!(bold("a ** b ** c"), "a ** b ** c");
/// ```
#[must_use]
pub fn bold(text: &str) -> String {
    rewrite_all(&BOLD_RE, text, |caps| {
        format!("<strong>{}</strong>", group(caps, 1))
    })
}

/// Wrap `*text*` in `<i>`.
///
/// # Examples
///
/// ```
/// use mdhtml::inline::italic;
/// assert_eq!(italic("a *b* c"), "a <i>b</i> c");
/// assert_eq!(italic("a * b * c"), "a * b * c");
/// ```
#[must_use]
pub fn italic(text: &str) -> String {
    rewrite_all(&ITALIC_RE, text, |caps| format!("<i>{}</i>", group(caps, 1)))
}

/// Turn every `[label](href)` into an `<a>` element.
///
/// # Examples
///
/// ```
/// use mdhtml::inline::anchors;
/// assert_eq!(anchors("[docs](/d)"), "<a href=\"/d\">docs</a>");
/// ```
#[must_use]
pub fn anchors(text: &str) -> String {
    rewrite_all(&ANCHOR_RE, text, |caps| {
        format!("<a href=\"{}\">{}</a>", group(caps, 2), group(caps, 1))
    })
}

/// A stretch of rendered HTML, either ordinary text or a fenced code region.
#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Code(&'a str),
}

/// Split `text` around `<code>` regions.
///
/// A separator of a single character between two code regions is dropped,
/// so consecutive fenced blocks end up back to back.
fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut prev_end: Option<usize> = None;
    for region in CODE_REGION_RE.find_iter(text) {
        let start = prev_end.unwrap_or(0);
        let gap = &text[start..region.start()];
        let keep = if prev_end.is_some() {
            gap.chars().nth(1).is_some()
        } else {
            !gap.is_empty()
        };
        if keep {
            out.push(Segment::Text(gap));
        }
        out.push(Segment::Code(region.as_str()));
        prev_end = Some(region.end());
    }
    out.push(Segment::Text(&text[prev_end.unwrap_or(0)..]));
    out
}

/// Turn backtick spans into `<code>` elements outside existing code regions.
///
/// # Examples
///
/// ```
/// use mdhtml::inline::inline_code;
/// assert_eq!(inline_code("run `ls`"), "run <code>ls</code>");
/// assert_eq!(
///     inline_code("<code>\n`raw`</code>"),
///     "<code>\n`raw`</code>"
/// );
/// ```
#[must_use]
pub fn inline_code(text: &str) -> String {
    segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(plain) => rewrite_all(&INLINE_CODE_RE, plain, |caps| {
                format!("<code>{}</code>", group(caps, 1))
            }),
            Segment::Code(code) => code.to_string(),
        })
        .collect()
}
