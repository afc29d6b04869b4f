//! Block-level parsing.
//!
//! The document is split on blank lines. Each block is classified in a fixed
//! order (fence start, list, heading, image, paragraph) unless a fenced code
//! region is still open, in which case the block is copied through until a
//! closing fence appears. Fence state is threaded through the blocks as an
//! explicit accumulator.

use tracing::debug;

use crate::{
    fences::{FenceState, close_fence, open_fence},
    headings::parse_header,
    images::parse_image,
    lists::{parse_list, split_list},
};

/// Separator between blocks.
const BLOCK_BREAK: &str = "\n\n";

/// How a block was rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    /// Opened a fenced code region, whether or not it also closed it.
    FenceStart,
    /// Contained a list, possibly after a lead-in.
    List,
    Heading,
    Image,
    Paragraph,
    /// Sat inside a fenced code region opened by an earlier block.
    FenceBody,
}

/// The result of rendering one block.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderedBlock {
    pub kind: BlockKind,
    pub html: String,
    /// Fence state to use for the next block.
    pub state: FenceState,
}

fn paragraph(block: &str) -> String {
    format!("<p>{block}</p>")
}

/// Render a block that cannot contain a list or fence.
fn render_leaf(block: &str) -> (BlockKind, String) {
    if let Some(html) = parse_header(block) {
        return (BlockKind::Heading, html);
    }
    if let Some(html) = parse_image(block) {
        return (BlockKind::Image, html);
    }
    (BlockKind::Paragraph, paragraph(block))
}

fn render_closed(block: &str) -> RenderedBlock {
    if let Some(opened) = open_fence(block) {
        let (html, state) = match close_fence(&opened) {
            Some(closed) => (closed, FenceState::Closed),
            None => (opened, FenceState::Open),
        };
        return RenderedBlock {
            kind: BlockKind::FenceStart,
            html,
            state,
        };
    }

    if let Some((lead_in, list)) = split_list(block) {
        let list = parse_list(list);
        let html = match lead_in {
            Some(lead_in) => format!("{}\n{list}", render_leaf(lead_in).1),
            None => list,
        };
        return RenderedBlock {
            kind: BlockKind::List,
            html,
            state: FenceState::Closed,
        };
    }

    let (kind, html) = render_leaf(block);
    RenderedBlock {
        kind,
        html,
        state: FenceState::Closed,
    }
}

fn render_fence_body(block: &str) -> RenderedBlock {
    let (body, state) = match close_fence(block) {
        Some(closed) => (closed, FenceState::Closed),
        None => (block.to_string(), FenceState::Open),
    };
    RenderedBlock {
        kind: BlockKind::FenceBody,
        // Restores the blank line consumed by the block split.
        html: format!("\n{body}"),
        state,
    }
}

/// Render a single block given the fence state left by the previous block.
///
/// # Examples
///
/// ```
/// use mdhtml::blocks::{BlockKind, render_block};
/// use mdhtml::fences::FenceState;
///
/// let first = render_block("```js\nlet a = 1;", FenceState::Closed);
/// assert_eq!(first.kind, BlockKind::FenceStart);
/// assert_eq!(first.state, FenceState::Open);
///
/// let second = render_block("let b = 2;```", first.state);
/// assert_eq!(second.html, "\nlet b = 2;</code>");
/// assert_eq!(second.state, FenceState::Closed);
/// ```
#[must_use]
pub fn render_block(block: &str, state: FenceState) -> RenderedBlock {
    match state {
        FenceState::Closed => render_closed(block),
        FenceState::Open => render_fence_body(block),
    }
}

/// Render every block of `document` and join the results.
///
/// Consecutive blocks are separated by a single newline. A fence left open
/// at the end of the document is emitted without its closing tag.
///
/// # Examples
///
/// ```
/// use mdhtml::blocks::parse_blocks;
/// assert_eq!(parse_blocks("# Title\n\nbody"), "<h1>Title</h1>\n<p>body</p>");
/// assert_eq!(parse_blocks(""), "");
/// ```
#[must_use]
pub fn parse_blocks(document: &str) -> String {
    if document.is_empty() {
        return String::new();
    }

    let (out, state) = document.split(BLOCK_BREAK).enumerate().fold(
        (String::with_capacity(document.len() * 2), FenceState::Closed),
        |(mut out, state), (idx, block)| {
            if idx > 0 {
                out.push('\n');
            }
            let rendered = render_block(block, state);
            if rendered.state != state {
                debug!(kind = ?rendered.kind, state = ?rendered.state, "fence state changed");
            }
            out.push_str(&rendered.html);
            (out, rendered.state)
        },
    );

    if state.is_open() {
        debug!("document ended inside a fenced code block");
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("```\na```", BlockKind::FenceStart)]
    #[case("- a", BlockKind::List)]
    #[case("intro\n- a", BlockKind::List)]
    #[case("# a", BlockKind::Heading)]
    #[case("![a](u)", BlockKind::Image)]
    #[case("plain", BlockKind::Paragraph)]
    #[case("", BlockKind::Paragraph)]
    fn classifies_blocks(#[case] block: &str, #[case] kind: BlockKind) {
        assert_eq!(render_block(block, FenceState::Closed).kind, kind);
    }

    #[test]
    fn fence_outranks_list() {
        let out = render_block("```\n- a\n```", FenceState::Closed);
        assert_eq!(out.kind, BlockKind::FenceStart);
        assert_eq!(out.html, "<code>\n- a\n</code>");
        assert_eq!(out.state, FenceState::Closed);
    }

    #[test]
    fn list_outranks_heading() {
        let out = render_block("# Steps\n1. a", FenceState::Closed);
        assert_eq!(out.html, "<h1>Steps</h1>\n<ol>\n  <li>a</li>\n</ol>");
    }

    #[test]
    fn heading_outranks_image() {
        let out = render_block("# ![a](u)", FenceState::Closed);
        assert_eq!(out.kind, BlockKind::Heading);
    }

    #[test]
    fn open_fence_copies_blocks_verbatim() {
        let out = render_block("# not a heading", FenceState::Open);
        assert_eq!(out.html, "\n# not a heading");
        assert_eq!(out.state, FenceState::Open);
    }

    #[test]
    fn separates_blocks_with_single_newline() {
        assert_eq!(parse_blocks("a\n\nb\n\nc"), "<p>a</p>\n<p>b</p>\n<p>c</p>");
    }

    #[test]
    fn extra_blank_lines_yield_empty_paragraphs() {
        assert_eq!(parse_blocks("a\n\n\n\nb"), "<p>a</p>\n<p></p>\n<p>b</p>");
    }

    #[test]
    fn fence_spanning_blocks_keeps_blank_lines() {
        assert_eq!(
            parse_blocks("```\nfirst\n\nsecond\n\nthird```"),
            "<code>\nfirst\n\nsecond\n\nthird</code>"
        );
    }

    #[test]
    fn unterminated_fence_has_no_closing_tag() {
        assert_eq!(parse_blocks("```\ncode\n\nmore"), "<code>\ncode\n\nmore");
    }
}
