//! Nested list parsing.
//!
//! Items are recognised line by line. Nesting comes from indentation: every
//! two columns beyond the first item's indentation is one level deeper. The
//! tree is built with an explicit stack of open containers and then rendered
//! with two spaces of indentation per nesting level.

use std::sync::LazyLock;

use regex::Regex;

use crate::matcher::group;

static ITEM_RE: LazyLock<Regex> =
    lazy_regex!(r"^([ \t]*)(?:(\d+)\.|[*-]) (.*)$", "valid list item regex");

/// Columns of indentation per nesting level.
const INDENT_UNIT: usize = 2;

/// Whether a list is numbered or bulleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Ordered => "ol",
            Self::Unordered => "ul",
        }
    }
}

/// A single list item line split into its parts.
#[derive(Debug, PartialEq, Eq)]
pub struct ListLine<'a> {
    /// Leading whitespace width in columns; tabs count as four.
    pub indent: usize,
    pub kind: ListKind,
    pub content: &'a str,
}

fn indent_len(indent: &str) -> usize {
    indent
        .chars()
        .fold(0, |acc, ch| acc + if ch == '\t' { 4 } else { 1 })
}

/// Parse `line` as a list item.
///
/// # Examples
///
/// ```
/// use mdhtml::lists::{ListKind, list_line};
///
/// let item = list_line("  12. twelve").unwrap();
/// assert_eq!((item.indent, item.kind, item.content), (2, ListKind::Ordered, "twelve"));
/// assert!(list_line("*emphasis*").is_none());
/// ```
#[must_use]
pub fn list_line(line: &str) -> Option<ListLine<'_>> {
    let caps = ITEM_RE.captures(line)?;
    let kind = if caps.get(2).is_some() {
        ListKind::Ordered
    } else {
        ListKind::Unordered
    };
    Some(ListLine {
        indent: indent_len(group(&caps, 1)),
        kind,
        content: group(&caps, 3),
    })
}

/// Report whether the first line of `block` is a list item.
#[must_use]
pub fn is_list(block: &str) -> bool {
    block.split('\n').next().is_some_and(|l| list_line(l).is_some())
}

/// Split `block` into an optional lead-in and the list that follows it.
///
/// A block whose first line is an item (see [`is_list`]) is all list. Otherwise
/// the lead-in is every line before the first list item, without the
/// trailing newline. A lead-in made only of whitespace is dropped. Returns
/// `None` when no line of `block` is a list item.
///
/// # Examples
///
/// ```
/// use mdhtml::lists::split_list;
///
/// assert_eq!(split_list("Intro\n- a\n- b"), Some((Some("Intro"), "- a\n- b")));
/// assert_eq!(split_list("- a"), Some((None, "- a")));
/// assert_eq!(split_list("just text"), None);
/// ```
#[must_use]
pub fn split_list(block: &str) -> Option<(Option<&str>, &str)> {
    if is_list(block) {
        return Some((None, block));
    }
    let mut offset = 0;
    for line in block.split('\n') {
        if list_line(line).is_some() {
            let lead_in = (offset > 0)
                .then(|| &block[..offset - 1])
                .filter(|l| !l.trim().is_empty());
            return Some((lead_in, &block[offset..]));
        }
        offset += line.len() + 1;
    }
    None
}

#[derive(Debug)]
enum Entry {
    Item(String),
    Nested(Container),
}

#[derive(Debug)]
struct Container {
    kind: ListKind,
    entries: Vec<Entry>,
}

impl Container {
    fn new(kind: ListKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }
}

/// Stack of open containers, innermost last, each tagged with its depth.
#[derive(Debug, Default)]
struct ListBuilder {
    base_indent: usize,
    open: Vec<(usize, Container)>,
}

impl ListBuilder {
    fn depth_of(&self, indent: usize) -> usize {
        indent.saturating_sub(self.base_indent) / INDENT_UNIT
    }

    fn push_item(&mut self, item: &ListLine<'_>) {
        if self.open.is_empty() {
            self.base_indent = item.indent;
            self.open.push((0, Container::new(item.kind)));
        }
        let depth = self.depth_of(item.indent);
        self.close_deeper_than(depth);
        // A deeper item opens a single container however far it jumps.
        if self.open.last().is_some_and(|&(current, _)| current < depth) {
            self.open.push((depth, Container::new(item.kind)));
        }
        if let Some((_, container)) = self.open.last_mut() {
            container.entries.push(Entry::Item(item.content.to_string()));
        }
    }

    /// Append a non-item line to the most recent entry.
    fn push_continuation(&mut self, line: &str) {
        let Some((_, container)) = self.open.last_mut() else {
            return;
        };
        match container.entries.last_mut() {
            Some(Entry::Item(text)) => {
                text.push('\n');
                text.push_str(line.trim());
            }
            _ => container.entries.push(Entry::Item(line.trim().to_string())),
        }
    }

    /// Pop containers nested deeper than `depth`, attaching each to its parent.
    fn close_deeper_than(&mut self, depth: usize) {
        while self.open.len() > 1 && self.open.last().is_some_and(|(d, _)| *d > depth) {
            if let Some((_, child)) = self.open.pop()
                && let Some((_, parent)) = self.open.last_mut()
            {
                parent.entries.push(Entry::Nested(child));
            }
        }
    }

    fn finish(mut self) -> Option<Container> {
        self.close_deeper_than(0);
        self.open.pop().map(|(_, root)| root)
    }
}

fn render(container: &Container, level: usize, out: &mut Vec<String>) {
    let pad = " ".repeat(level * INDENT_UNIT);
    let tag = container.kind.tag();
    out.push(format!("{pad}<{tag}>"));
    for entry in &container.entries {
        match entry {
            Entry::Item(text) => out.push(format!("{pad}  <li>{text}</li>")),
            Entry::Nested(child) => {
                out.push(format!("{pad}  <li>"));
                render(child, level + 2, out);
                out.push(format!("{pad}  </li>"));
            }
        }
    }
    out.push(format!("{pad}</{tag}>"));
}

/// Render a list block as nested `<ol>`/`<ul>` markup.
///
/// Each container takes its tag from the item that opened it. A deeper item
/// opens a new container inside a fresh `<li>` of its parent; a shallower one
/// closes containers back to its depth. Lines that are not list items are
/// appended to the preceding item. Lines before the first item belong to the
/// caller (see [`split_list`]) and are skipped.
///
/// # Examples
///
/// ```
/// use mdhtml::lists::parse_list;
///
/// assert_eq!(parse_list("1. one\n2. two"), "<ol>\n  <li>one</li>\n  <li>two</li>\n</ol>");
/// ```
#[must_use]
pub fn parse_list(block: &str) -> String {
    let mut builder = ListBuilder::default();
    for line in block.split('\n') {
        match list_line(line) {
            Some(item) => builder.push_item(&item),
            None if line.trim().is_empty() => {}
            None => builder.push_continuation(line),
        }
    }
    let Some(root) = builder.finish() else {
        return String::new();
    };
    let mut out = Vec::new();
    render(&root, 0, &mut out);
    out.join("\n")
}
