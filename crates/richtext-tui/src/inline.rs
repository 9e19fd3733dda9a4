//! Inline content rendering to Ratatui spans

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use richtext_core::InlineContent;
use unicode_width::UnicodeWidthStr;

use crate::links::LinkSpan;
use crate::styles::RichTextStyles;

/// Inline content rendered into one or more lines of spans.
///
/// Link positions are relative: `line` indexes into `lines`, columns are
/// display-width units from the start of the content (no block prefix).
pub(crate) struct InlineLines {
    pub lines: Vec<Vec<Span<'static>>>,
    pub links: Vec<LinkSpan>,
}

/// Render inline content under an ambient style, splitting on line breaks
/// and tracking link positions.
pub(crate) fn render_inline(
    content: &[InlineContent],
    styles: &RichTextStyles,
    ambient: Style,
) -> InlineLines {
    let mut writer = InlineWriter {
        styles,
        lines: Vec::new(),
        completed_cols: Vec::new(),
        current: Vec::new(),
        col: 0,
        links: Vec::new(),
    };
    writer.write_all(content, ambient);
    writer.finish()
}

struct InlineWriter<'a> {
    styles: &'a RichTextStyles,
    lines: Vec<Vec<Span<'static>>>,
    /// Final column of each completed line, for links that span a break
    completed_cols: Vec<usize>,
    current: Vec<Span<'static>>,
    col: usize,
    links: Vec<LinkSpan>,
}

impl InlineWriter<'_> {
    fn write_all(&mut self, content: &[InlineContent], ambient: Style) {
        for item in content {
            self.write(item, ambient);
        }
    }

    fn write(&mut self, item: &InlineContent, ambient: Style) {
        match item {
            InlineContent::Plain(text) => self.push_span(text.clone(), ambient),
            InlineContent::LineBreak => self.break_line(),
            InlineContent::Strong(children) => {
                self.write_all(children, ambient.add_modifier(Modifier::BOLD));
            }
            InlineContent::Emphasis(children) => {
                self.write_all(children, ambient.add_modifier(Modifier::ITALIC));
            }
            InlineContent::Code(text) => {
                self.push_span(text.clone(), ambient.patch(self.styles.code));
            }
            InlineContent::Link { url, children } => {
                let start_line = self.lines.len();
                let start_col = self.col;
                self.write_all(children, ambient.patch(self.styles.link));

                // If the label broke onto further lines, the clickable
                // region covers the remainder of the line it started on
                let end_col = if self.lines.len() == start_line {
                    self.col
                } else {
                    self.completed_cols[start_line]
                };
                if end_col > start_col {
                    self.links.push(LinkSpan {
                        url: url.clone(),
                        line: start_line,
                        start_col,
                        end_col,
                    });
                }
            }
        }
    }

    fn push_span(&mut self, text: String, style: Style) {
        if text.is_empty() {
            return;
        }
        self.col += UnicodeWidthStr::width(text.as_str());
        self.current.push(Span::styled(text, style));
    }

    fn break_line(&mut self) {
        let spans = std::mem::take(&mut self.current);
        self.lines.push(spans);
        self.completed_cols.push(self.col);
        self.col = 0;
    }

    fn finish(mut self) -> InlineLines {
        self.break_line();
        InlineLines {
            lines: self.lines,
            links: self.links,
        }
    }
}
