//! Fenced code block detection.
//!
//! A fence is three backticks. An opening fence sits at the start of a line
//! and may carry a language tag; a closing fence sits at the end of a line.
//! Both detectors return the rewritten text rather than a flag so callers can
//! feed the result straight into the next step.
use std::sync::LazyLock;

use regex::Regex;

use crate::matcher::{group, replace_first};

static FENCE_START_RE: LazyLock<Regex> =
    lazy_regex!(r"(?m)^```(\w+)?", "valid fence start regex");

static FENCE_END_RE: LazyLock<Regex> = lazy_regex!(r"(?m)```$", "valid fence end regex");

/// Whether the block parser is inside a fenced code region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FenceState {
    /// Blocks are classified normally.
    #[default]
    Closed,
    /// Blocks are copied through until a closing fence shows up.
    Open,
}

impl FenceState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Replace the first opening fence in `text` with a `<code>` tag.
///
/// A language tag directly after the backticks becomes a
/// `language-<tag>` class.
///
/// # Examples
///
/// ```
/// use mdhtml::fences::open_fence;
/// assert_eq!(
///     open_fence("```rust\nfn main() {}").as_deref(),
///     Some("<code class=\"language-rust\">\nfn main() {}")
/// );
/// assert_eq!(open_fence("no fence here"), None);
/// ```
#[must_use]
pub fn open_fence(text: &str) -> Option<String> {
    replace_first(&FENCE_START_RE, text, |caps| match group(caps, 1) {
        "" => "<code>".to_string(),
        lang => format!("<code class=\"language-{lang}\">"),
    })
}

/// Replace the first closing fence in `text` with `</code>`.
///
/// # Examples
///
/// ```
/// use mdhtml::fences::close_fence;
/// assert_eq!(close_fence("x = 1;```").as_deref(), Some("x = 1;</code>"));
/// assert_eq!(close_fence("```x"), None);
/// ```
#[must_use]
pub fn close_fence(text: &str) -> Option<String> {
    replace_first(&FENCE_END_RE, text, |_| "</code>".to_string())
}
