//! Link tracking for rendered output
//!
//! The renderer does not paint anything itself; it reports where link text
//! landed so the display sink can wire clicks (OSC 8 sequences, mouse hit
//! testing) to the URL.

use ratatui::text::Line;

/// A hyperlink's position in rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    /// The URL this link points to
    pub url: String,
    /// Line index in rendered output (0-based)
    pub line: usize,
    /// Start column in display width units (0-based)
    pub start_col: usize,
    /// End column in display width units (exclusive)
    pub end_col: usize,
}

/// Rendered rich text with link tracking
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedText {
    /// The rendered lines of text
    pub lines: Vec<Line<'static>>,
    /// All hyperlinks with their positions
    pub links: Vec<LinkSpan>,
}
