//! Intermediate representation of a rich document
//!
//! Agnostic of the underlying markdown parser and of whatever paints the
//! output. Trees are strictly parent-owns-child; nodes are never mutated
//! after lowering completes.

/// A complete rich document: an ordered sequence of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichDocument {
    pub blocks: Vec<BlockContent>,
}

/// Top-level renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    /// A paragraph of inline content
    Paragraph(Vec<InlineContent>),
    /// A heading with level (1-6) and inline content
    Heading {
        level: u8,
        content: Vec<InlineContent>,
    },
    /// An ordered or unordered list
    ListBlock {
        ordered: bool,
        items: Vec<ListItem>,
    },
    /// A block quote containing nested blocks
    BlockQuote(Vec<BlockContent>),
}

/// A list item containing block content.
///
/// Items whose content lowers to nothing are discarded during lowering,
/// so `content` is never empty for parser-produced documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: Vec<BlockContent>,
}

/// Content within a block's text flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineContent {
    /// A forced line break
    LineBreak,
    /// A literal text run
    Plain(String),
    /// Bold content
    Strong(Vec<InlineContent>),
    /// Italic content
    Emphasis(Vec<InlineContent>),
    /// An opaque code span (never decomposed further)
    Code(String),
    /// A hyperlink with a lowered label
    Link {
        url: String,
        children: Vec<InlineContent>,
    },
}
