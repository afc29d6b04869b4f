//! Render a small markdown dialect to HTML.
//!
//! The document is split into blank-line separated blocks which become
//! paragraphs, headings, image wrappers, nested lists or fenced code. Bold,
//! italic, links and inline code are then rewritten across the whole output.
//! Rendering never fails: anything unrecognised ends up in a paragraph.
//!
//! ```
//! use mdhtml::render;
//!
//! let html = render("# Notes\n\nSee [docs](/docs) and `cargo doc`.");
//! assert_eq!(
//!     html,
//!     "<h1>Notes</h1>\n<p>See <a href=\"/docs\">docs</a> and <code>cargo doc</code>.</p>"
//! );
//! ```

#[macro_use]
mod macros;

pub mod blocks;
pub mod cache;
pub mod fences;
pub mod headings;
pub mod images;
pub mod inline;
pub mod io;
pub mod lists;
mod matcher;
pub mod render;

pub use blocks::parse_blocks;
pub use cache::{CacheError, DirCache, MemoryCache, RenderCache};
pub use fences::FenceState;
pub use io::{render_file, write_html};
pub use lists::{is_list, parse_list};
pub use render::{render, render_cached};
