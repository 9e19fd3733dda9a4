//! Block lowering: markdown events to [`BlockContent`]

use pulldown_cmark::{Event, Tag, TagEnd};

use crate::inline::{collect_loose_inline, compress_plain_runs, lower_inline_until};
use crate::ir::{BlockContent, InlineContent, ListItem};

/// Lower a complete event stream into block content.
pub(crate) fn lower_blocks(events: &[Event<'_>]) -> Vec<BlockContent> {
    let (blocks, _) = lower_blocks_until(events, 0, None);
    blocks
}

/// Lower events into blocks until the matching end tag (or end of input).
///
/// Dispatch covers paragraphs, headings, lists and block quotes; any other
/// container recurses into its children and concatenates the results, so
/// lowering is total over the event stream and never fails.
fn lower_blocks_until(
    events: &[Event<'_>],
    start: usize,
    end: Option<TagEnd>,
) -> (Vec<BlockContent>, usize) {
    let mut blocks = Vec::new();
    let mut idx = start;

    while idx < events.len() {
        match &events[idx] {
            Event::End(tag) if Some(*tag) == end => return (blocks, idx + 1),
            Event::Start(tag) => match tag {
                Tag::Paragraph => {
                    let (content, next) = lower_inline_until(events, idx + 1, TagEnd::Paragraph);
                    blocks.push(BlockContent::Paragraph(compress_plain_runs(content)));
                    idx = next;
                }
                Tag::Heading { level, .. } => {
                    let (content, next) =
                        lower_inline_until(events, idx + 1, TagEnd::Heading(*level));
                    blocks.push(BlockContent::Heading {
                        level: *level as u8,
                        content: compress_plain_runs(strip_heading_leader(content)),
                    });
                    idx = next;
                }
                Tag::List(first) => {
                    let ordered = first.is_some();
                    let (items, next) = lower_list_items(events, idx + 1);
                    blocks.push(BlockContent::ListBlock { ordered, items });
                    idx = next;
                }
                Tag::BlockQuote(_) => {
                    let (content, next) =
                        lower_blocks_until(events, idx + 1, Some(tag.to_end()));
                    blocks.push(BlockContent::BlockQuote(content));
                    idx = next;
                }
                // Code fences have no block representation in the IR
                Tag::CodeBlock(_) => idx = skip_past_end(events, idx + 1, tag.to_end()),
                // Tight list items carry bare inline content with no
                // paragraph wrapper
                Tag::Strong | Tag::Emphasis | Tag::Link { .. } | Tag::Image { .. } => {
                    idx = lower_loose_paragraph(events, idx, &mut blocks);
                }
                _ => {
                    let (nested, next) =
                        lower_blocks_until(events, idx + 1, Some(tag.to_end()));
                    blocks.extend(nested);
                    idx = next;
                }
            },
            Event::Text(_) | Event::Code(_) | Event::SoftBreak | Event::HardBreak => {
                idx = lower_loose_paragraph(events, idx, &mut blocks);
            }
            _ => idx += 1,
        }
    }

    (blocks, idx)
}

/// Wrap loose inline events into a synthesized paragraph, if they lower to
/// anything at all.
fn lower_loose_paragraph(
    events: &[Event<'_>],
    idx: usize,
    blocks: &mut Vec<BlockContent>,
) -> usize {
    let (content, next) = collect_loose_inline(events, idx);
    let content = compress_plain_runs(content);
    if !content.is_empty() {
        blocks.push(BlockContent::Paragraph(content));
    }
    next
}

fn lower_list_items(events: &[Event<'_>], start: usize) -> (Vec<ListItem>, usize) {
    let mut items = Vec::new();
    let mut idx = start;

    while idx < events.len() {
        match &events[idx] {
            Event::End(TagEnd::List(_)) => return (items, idx + 1),
            Event::Start(Tag::Item) => {
                let (content, next) = lower_blocks_until(events, idx + 1, Some(TagEnd::Item));
                // Items that lower to nothing produce no list item at all
                if !content.is_empty() {
                    items.push(ListItem { content });
                }
                idx = next;
            }
            _ => idx += 1,
        }
    }

    (items, idx)
}

fn skip_past_end(events: &[Event<'_>], start: usize, end: TagEnd) -> usize {
    let mut idx = start;
    while idx < events.len() {
        if matches!(&events[idx], Event::End(tag) if *tag == end) {
            return idx + 1;
        }
        idx += 1;
    }
    idx
}

/// Drop a leading whitespace-only `Plain` left behind by the heading
/// leader token.
fn strip_heading_leader(mut content: Vec<InlineContent>) -> Vec<InlineContent> {
    if let Some(InlineContent::Plain(text)) = content.first() {
        if text.trim().is_empty() {
            content.remove(0);
        }
    }
    content
}
