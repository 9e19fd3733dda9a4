//! Block rendering with indentation and numbering context

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use richtext_core::{BlockContent, InlineContent, ListItem, RichDocument};
use unicode_width::UnicodeWidthStr;

use crate::inline::render_inline;
use crate::links::{LinkSpan, RenderedText};
use crate::styles::RichTextStyles;
use crate::RenderError;

/// Maximum indentation depth before input is rejected as too complex.
pub(crate) const MAX_NESTING: usize = 32;

const LIST_BULLET: &str = "\u{2022}";
const LIST_SEPARATOR: &str = "  ";
const QUOTE_BAR: &str = "\u{258c} ";

/// One level of the indentation prefix carried down the block recursion.
#[derive(Clone, Copy)]
enum PrefixSeg {
    /// One list indentation unit
    Indent,
    /// Block quote indicator bar, drawn on every line of the quote
    Bar,
}

pub(crate) fn render_document(
    document: &RichDocument,
    styles: &RichTextStyles,
) -> Result<RenderedText, RenderError> {
    let mut renderer = Renderer {
        styles,
        prefix: Vec::new(),
        lines: Vec::new(),
        links: Vec::new(),
    };
    for block in &document.blocks {
        renderer.render_block(block)?;
    }
    Ok(RenderedText {
        lines: renderer.lines,
        links: renderer.links,
    })
}

struct Renderer<'a> {
    styles: &'a RichTextStyles,
    prefix: Vec<PrefixSeg>,
    lines: Vec<Line<'static>>,
    links: Vec<LinkSpan>,
}

impl Renderer<'_> {
    fn render_block(&mut self, block: &BlockContent) -> Result<(), RenderError> {
        if self.prefix.len() > MAX_NESTING {
            return Err(RenderError::NestingTooDeep { max: MAX_NESTING });
        }
        match block {
            BlockContent::Paragraph(content) => {
                self.emit_inline(content, self.styles.body, None);
                Ok(())
            }
            BlockContent::Heading { level, content } => {
                let style = self.styles.heading(*level)?;
                self.emit_inline(content, style, None);
                Ok(())
            }
            BlockContent::ListBlock { ordered, items } => self.render_list(*ordered, items),
            BlockContent::BlockQuote(content) => {
                self.prefix.push(PrefixSeg::Bar);
                let result = content
                    .iter()
                    .try_for_each(|child| self.render_block(child));
                self.prefix.pop();
                result
            }
        }
    }

    fn render_list(&mut self, ordered: bool, items: &[ListItem]) -> Result<(), RenderError> {
        for (index, item) in items.iter().enumerate() {
            for element in &item.content {
                if let BlockContent::Paragraph(content) = element {
                    // Numbering is positional; any numbering in the source
                    // is ignored
                    let marker = if ordered {
                        format!("{}.", index + 1)
                    } else {
                        LIST_BULLET.to_string()
                    };
                    self.emit_inline(content, self.styles.body, Some(marker));
                } else {
                    self.prefix.push(PrefixSeg::Indent);
                    let result = self.render_block(element);
                    self.prefix.pop();
                    result?;
                }
            }
        }
        Ok(())
    }

    fn prefix_spans(&self) -> (Vec<Span<'static>>, usize) {
        let mut spans = Vec::with_capacity(self.prefix.len());
        let mut width = 0;
        for seg in &self.prefix {
            match seg {
                PrefixSeg::Indent => {
                    let indent = " ".repeat(self.styles.list_indent as usize);
                    width += indent.len();
                    spans.push(Span::raw(indent));
                }
                PrefixSeg::Bar => {
                    width += UnicodeWidthStr::width(QUOTE_BAR);
                    spans.push(Span::styled(QUOTE_BAR, self.styles.quote_indicator));
                }
            }
        }
        (spans, width)
    }

    /// Emit one block's inline content as output lines, applying the
    /// indentation prefix and an optional list marker on the first line.
    fn emit_inline(&mut self, content: &[InlineContent], style: Style, marker: Option<String>) {
        let rendered = render_inline(content, self.styles, style);
        let (prefix, prefix_width) = self.prefix_spans();
        let marker_width = marker
            .as_ref()
            .map(|m| UnicodeWidthStr::width(m.as_str()) + LIST_SEPARATOR.len())
            .unwrap_or(0);
        let base_line = self.lines.len();

        for (offset, spans) in rendered.lines.into_iter().enumerate() {
            let mut line = prefix.clone();
            if offset == 0 {
                if let Some(marker) = &marker {
                    line.push(Span::styled(format!("{marker}{LIST_SEPARATOR}"), style));
                }
            }
            line.extend(spans);
            self.lines.push(Line::from(line));
        }

        for link in rendered.links {
            let shift = prefix_width + if link.line == 0 { marker_width } else { 0 };
            self.links.push(LinkSpan {
                url: link.url,
                line: base_line + link.line,
                start_col: link.start_col + shift,
                end_col: link.end_col + shift,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, render_markdown};
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Modifier};
    use richtext_core::parse;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn rendered_texts(source: &str) -> Vec<String> {
        let rendered = render_markdown(source, &RichTextStyles::default()).unwrap();
        rendered.lines.iter().map(line_text).collect()
    }

    #[test]
    fn ordered_list_numbers_by_position() {
        assert_eq!(
            rendered_texts("1. First item\n5. Second item\n9. Third item"),
            vec!["1.  First item", "2.  Second item", "3.  Third item"]
        );
    }

    #[test]
    fn unordered_list_uses_bullets() {
        assert_eq!(
            rendered_texts("- one\n- two"),
            vec!["\u{2022}  one", "\u{2022}  two"]
        );
    }

    #[test]
    fn nested_list_content_is_indented() {
        assert_eq!(
            rendered_texts("- parent\n  - child"),
            vec!["\u{2022}  parent", "  \u{2022}  child"]
        );
    }

    #[test]
    fn block_quote_draws_bar_on_every_line() {
        assert_eq!(
            rendered_texts("> first line\n>\n> second line"),
            vec!["\u{258c} first line", "\u{258c} second line"]
        );
    }

    #[test]
    fn nested_block_quote_stacks_bars() {
        assert_eq!(
            rendered_texts("> outer\n>\n> > inner"),
            vec!["\u{258c} outer", "\u{258c} \u{258c} inner"]
        );
    }

    #[test]
    fn quote_bar_carries_indicator_style() {
        let styles = RichTextStyles::default();
        let rendered = render_markdown("> quoted", &styles).unwrap();
        assert_eq!(rendered.lines[0].spans[0].style, styles.quote_indicator);
    }

    #[test]
    fn line_break_starts_a_new_line() {
        assert_eq!(
            rendered_texts("line one\nline two"),
            vec!["line one", "line two"]
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let document = parse("# Title\n\npara with [a](https://a.example) link\n\n> quote");
        let styles = RichTextStyles::default();
        assert_eq!(
            render(&document, &styles).unwrap(),
            render(&document, &styles).unwrap()
        );
    }

    #[test]
    fn link_positions_use_display_columns() {
        let rendered =
            render_markdown("see [docs](https://example.com)", &RichTextStyles::default()).unwrap();
        assert_eq!(
            rendered.links,
            vec![LinkSpan {
                url: "https://example.com".to_string(),
                line: 0,
                start_col: 4,
                end_col: 8,
            }]
        );
    }

    #[test]
    fn link_positions_account_for_list_markers() {
        let rendered =
            render_markdown("1. [a](https://a.example)", &RichTextStyles::default()).unwrap();
        assert_eq!(
            rendered.links,
            vec![LinkSpan {
                url: "https://a.example".to_string(),
                line: 0,
                start_col: 4,
                end_col: 5,
            }]
        );
    }

    #[test]
    fn nested_styles_compose_without_clobbering() {
        use richtext_core::{BlockContent, InlineContent, RichDocument};

        let styles = RichTextStyles {
            h2: Style::new()
                .bg(Color::Rgb(32, 32, 32))
                .add_modifier(Modifier::BOLD),
            ..RichTextStyles::default()
        };

        let document = RichDocument {
            blocks: vec![BlockContent::Heading {
                level: 2,
                content: vec![InlineContent::Strong(vec![InlineContent::Link {
                    url: "https://example.com".to_string(),
                    children: vec![InlineContent::Plain("click".to_string())],
                }])],
            }],
        };

        let rendered = render(&document, &styles).unwrap();
        let span = &rendered.lines[0].spans[0];
        assert_eq!(span.content.as_ref(), "click");
        assert_eq!(
            span.style,
            Style::new()
                .bg(Color::Rgb(32, 32, 32))
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        );
    }

    #[test]
    fn code_spans_merge_against_ambient_style() {
        let styles = RichTextStyles::default();
        let rendered = render_markdown("run `cargo` now", &styles).unwrap();
        let code_span = &rendered.lines[0].spans[1];
        assert_eq!(code_span.content.as_ref(), "cargo");
        assert_eq!(code_span.style, styles.body.patch(styles.code));
    }

    #[test]
    fn heading_uses_configured_style() {
        let styles = RichTextStyles::default();
        let rendered = render_markdown("# Title", &styles).unwrap();
        assert_eq!(rendered.lines[0].spans[0].style, styles.h1);
    }

    #[test]
    fn out_of_range_heading_level_is_rejected() {
        use richtext_core::{BlockContent, RichDocument};

        let document = RichDocument {
            blocks: vec![BlockContent::Heading {
                level: 7,
                content: Vec::new(),
            }],
        };
        assert_eq!(
            render(&document, &RichTextStyles::default()),
            Err(RenderError::InvalidHeadingLevel(7))
        );
    }

    #[test]
    fn pathological_nesting_is_rejected() {
        use richtext_core::{BlockContent, InlineContent, RichDocument};

        let mut block = BlockContent::Paragraph(vec![InlineContent::Plain("x".to_string())]);
        for _ in 0..(MAX_NESTING + 8) {
            block = BlockContent::BlockQuote(vec![block]);
        }
        assert_eq!(
            render(&RichDocument { blocks: vec![block] }, &RichTextStyles::default()),
            Err(RenderError::NestingTooDeep { max: MAX_NESTING })
        );
    }

    #[test]
    fn empty_document_renders_nothing() {
        let rendered = render(&parse(""), &RichTextStyles::default()).unwrap();
        assert!(rendered.lines.is_empty());
        assert!(rendered.links.is_empty());
    }
}
