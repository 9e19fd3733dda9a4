//! Rich text rendering to styled Ratatui lines
//!
//! Walks a [`RichDocument`] and produces [`RenderedText`]: styled
//! `Line`/`Span` sequences plus [`LinkSpan`] annotations telling the
//! display layer where clickable link text landed. Layout (wrapping,
//! painting, click handling) belongs to the caller.
//!
//! Rendering is a pure tree walk with no shared state; rendering the same
//! document twice with the same [`RichTextStyles`] produces identical
//! output.

mod inline;
mod links;
mod renderer;
mod styles;

pub use links::{LinkSpan, RenderedText};
pub use styles::RichTextStyles;

use richtext_core::RichDocument;

/// Errors surfaced at the render boundary.
///
/// These are caller-side contract violations; no error originates from the
/// document walk itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The style configuration was asked for a heading level outside 1-6.
    #[error("unsupported heading level {0} (expected 1-6)")]
    InvalidHeadingLevel(u8),
    /// The document nests deeper than the renderer will recurse.
    #[error("document nesting exceeds {max} levels")]
    NestingTooDeep { max: usize },
}

/// Render a lowered document to styled lines with link tracking.
pub fn render(
    document: &RichDocument,
    styles: &RichTextStyles,
) -> Result<RenderedText, RenderError> {
    let rendered = renderer::render_document(document, styles)?;
    tracing::trace!(
        lines = rendered.lines.len(),
        links = rendered.links.len(),
        "rendered document"
    );
    Ok(rendered)
}

/// Parse markdown and render it in one call.
pub fn render_markdown(
    source: &str,
    styles: &RichTextStyles,
) -> Result<RenderedText, RenderError> {
    render(&richtext_core::parse(source), styles)
}
