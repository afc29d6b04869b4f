//! Helper macros used across the crate.

/// Compile a pattern into a lazily initialised [`Regex`].
///
/// The message is used when the pattern fails to compile, which only
/// happens for a programming error in one of the crate's own patterns.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static HASHES: LazyLock<Regex> = mdhtml::lazy_regex!(r"^#{1,6} ", "heading marker");
/// assert!(HASHES.is_match("## title"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
