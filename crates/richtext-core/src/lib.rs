//! Markdown lowering to a presentation-agnostic rich text IR
//!
//! Turns a markdown source string into a [`RichDocument`]: a tree of blocks
//! (paragraphs, headings, lists, quotes) and inline content (text runs,
//! emphasis, code spans, links). Parsing is delegated to `pulldown-cmark`;
//! this crate owns the lowering from its event stream into the IR.
//!
//! The IR is independent of any display technology - see `richtext-tui` for
//! rendering it to styled terminal spans.

pub mod ir;

mod block;
mod inline;

pub use ir::{BlockContent, InlineContent, ListItem, RichDocument};

use pulldown_cmark::Parser;

/// Lower markdown source into a [`RichDocument`].
///
/// Total over its input: malformed markdown degrades to partial or empty
/// output, never an error. Markdown extensions (tables, footnotes, raw
/// HTML) are not recognized; unknown constructs flatten into their children
/// or drop out entirely.
pub fn parse(source: &str) -> RichDocument {
    let events: Vec<_> = Parser::new(source).collect();
    let blocks = block::lower_blocks(&events);
    tracing::trace!(blocks = blocks.len(), "lowered markdown document");
    RichDocument { blocks }
}
