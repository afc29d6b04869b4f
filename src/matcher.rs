//! Scan-and-replace primitives shared by the block and inline rewriters.
//!
//! A rewriter pairs a compiled pattern with a closure that builds the
//! replacement from the captures. The primitives return `None` when the
//! pattern never matched, so callers can tell "nothing to do" apart from a
//! rewrite that happens to produce an empty string.

use regex::{Captures, Regex};

/// Return capture group `idx`, or an empty string when it did not take part
/// in the match.
pub(crate) fn group<'t>(caps: &Captures<'t>, idx: usize) -> &'t str {
    caps.get(idx).map_or("", |m| m.as_str())
}

/// Rewrite the leftmost match of `re` in `text`.
///
/// Returns `None` if `re` does not match anywhere.
pub(crate) fn replace_first<F>(re: &Regex, text: &str, build: F) -> Option<String>
where
    F: FnOnce(&Captures<'_>) -> String,
{
    let caps = re.captures(text)?;
    let whole = caps.get(0)?;
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..whole.start()]);
    out.push_str(&build(&caps));
    out.push_str(&text[whole.end()..]);
    Some(out)
}

/// Rewrite every non-overlapping match of `re` in `text`, scanning left to
/// right.
///
/// Returns `None` if `re` does not match anywhere.
pub(crate) fn replace_all<F>(re: &Regex, text: &str, mut build: F) -> Option<String>
where
    F: FnMut(&Captures<'_>) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut matched = false;
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        matched = true;
        out.push_str(&text[last..whole.start()]);
        out.push_str(&build(&caps));
        last = whole.end();
    }
    if !matched {
        return None;
    }
    out.push_str(&text[last..]);
    Some(out)
}

/// Like [`replace_all`], but hands back an owned copy of `text` when nothing
/// matched.
pub(crate) fn rewrite_all<F>(re: &Regex, text: &str, build: F) -> String
where
    F: FnMut(&Captures<'_>) -> String,
{
    replace_all(re, text, build).unwrap_or_else(|| text.to_owned())
}
