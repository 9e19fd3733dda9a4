//! Inline lowering: markdown events to [`InlineContent`]

use pulldown_cmark::{Event, Tag, TagEnd};

use crate::ir::InlineContent;

/// Lower inline events until the matching end tag.
///
/// Unknown containers are flattened into their children; events with no
/// inline interpretation are skipped.
pub(crate) fn lower_inline_until(
    events: &[Event<'_>],
    start: usize,
    end: TagEnd,
) -> (Vec<InlineContent>, usize) {
    let mut content = Vec::new();
    let mut idx = start;

    while idx < events.len() {
        if matches!(&events[idx], Event::End(tag) if *tag == end) {
            return (content, idx + 1);
        }
        match lower_inline_event(events, idx) {
            Some((items, next)) => {
                content.extend(items);
                idx = next;
            }
            None => idx += 1,
        }
    }

    (content, idx)
}

/// Collect loose inline content (tight list items don't wrap their text in
/// paragraph tags). Stops at the first event that is not inline content.
pub(crate) fn collect_loose_inline(
    events: &[Event<'_>],
    start: usize,
) -> (Vec<InlineContent>, usize) {
    let mut content = Vec::new();
    let mut idx = start;

    while idx < events.len() {
        match lower_inline_event(events, idx) {
            Some((items, next)) => {
                content.extend(items);
                idx = next;
            }
            None => break,
        }
    }

    (content, idx)
}

/// Lower a single inline event, including everything nested under it.
///
/// Returns `None` for events that have no inline interpretation, leaving
/// the caller to decide whether that means "skip" or "stop".
fn lower_inline_event(events: &[Event<'_>], idx: usize) -> Option<(Vec<InlineContent>, usize)> {
    let lowered = match &events[idx] {
        Event::Text(text) => (vec![InlineContent::Plain(text.to_string())], idx + 1),
        Event::Code(code) => (vec![InlineContent::Code(code.to_string())], idx + 1),
        Event::SoftBreak | Event::HardBreak => (vec![InlineContent::LineBreak], idx + 1),
        Event::Start(Tag::Strong) => {
            let (children, next) = lower_inline_until(events, idx + 1, TagEnd::Strong);
            (
                vec![InlineContent::Strong(compress_plain_runs(children))],
                next,
            )
        }
        Event::Start(Tag::Emphasis) => {
            let (children, next) = lower_inline_until(events, idx + 1, TagEnd::Emphasis);
            (
                vec![InlineContent::Emphasis(compress_plain_runs(children))],
                next,
            )
        }
        Event::Start(Tag::Link { dest_url, .. }) => {
            let (children, next) = lower_inline_until(events, idx + 1, TagEnd::Link);
            (
                vec![InlineContent::Link {
                    url: dest_url.to_string(),
                    children: compress_plain_runs(children),
                }],
                next,
            )
        }
        Event::Start(Tag::Image { .. }) => {
            // No image support; the alt text survives as plain content
            lower_inline_until(events, idx + 1, TagEnd::Image)
        }
        _ => return None,
    };
    Some(lowered)
}

/// Compress adjacent `Plain` runs into single items.
///
/// The parser emits separate text events around escapes and entities, so a
/// run of literal text can arrive as several `Plain` items. Grouping them
/// changes only the internal grouping of the sequence, never its content.
pub(crate) fn compress_plain_runs(content: Vec<InlineContent>) -> Vec<InlineContent> {
    if content.is_empty() {
        return content;
    }

    let mut result = Vec::with_capacity(content.len());
    let mut buffer = String::new();

    for item in content {
        match item {
            InlineContent::Plain(text) => buffer.push_str(&text),
            other => {
                if !buffer.is_empty() {
                    result.push(InlineContent::Plain(std::mem::take(&mut buffer)));
                }
                result.push(other);
            }
        }
    }

    if !buffer.is_empty() {
        result.push(InlineContent::Plain(buffer));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn plain(text: &str) -> InlineContent {
        InlineContent::Plain(text.to_string())
    }

    #[test]
    fn compress_merges_adjacent_plain_runs() {
        let input = vec![
            plain("a"),
            plain(" line of"),
            plain(" text"),
            InlineContent::Code("x".to_string()),
            plain("tail"),
        ];
        assert_eq!(
            compress_plain_runs(input),
            vec![
                plain("a line of text"),
                InlineContent::Code("x".to_string()),
                plain("tail"),
            ]
        );
    }

    #[test]
    fn compress_keeps_non_plain_items_in_order() {
        let input = vec![
            InlineContent::LineBreak,
            plain("a"),
            InlineContent::LineBreak,
            plain("b"),
        ];
        assert_eq!(
            compress_plain_runs(input),
            vec![
                InlineContent::LineBreak,
                plain("a"),
                InlineContent::LineBreak,
                plain("b"),
            ]
        );
    }

    #[test]
    fn compress_handles_empty_sequences() {
        assert_eq!(compress_plain_runs(Vec::new()), Vec::new());
    }

    fn arbitrary_inline() -> impl Strategy<Value = InlineContent> {
        prop_oneof![
            "[a-z]".prop_map(InlineContent::Plain),
            Just(InlineContent::LineBreak),
            "[a-z]{1,4}".prop_map(InlineContent::Code),
        ]
    }

    fn plain_text(content: &[InlineContent]) -> String {
        content
            .iter()
            .map(|item| match item {
                InlineContent::Plain(text) => text.as_str(),
                _ => "",
            })
            .collect()
    }

    proptest! {
        #[test]
        fn compression_leaves_no_adjacent_plain_runs(
            items in proptest::collection::vec(arbitrary_inline(), 0..32)
        ) {
            let text_before = plain_text(&items);
            let compressed = compress_plain_runs(items);

            for pair in compressed.windows(2) {
                prop_assert!(!(
                    matches!(pair[0], InlineContent::Plain(_))
                        && matches!(pair[1], InlineContent::Plain(_))
                ));
            }
            prop_assert_eq!(plain_text(&compressed), text_before);
        }
    }
}
