//! Style configuration for rendering

use ratatui::style::{Color, Modifier, Style};

use crate::RenderError;

/// Style configuration for a render pass.
///
/// The code and link styles are overlays: at render time they are patched
/// onto the ambient style of the surrounding block, so only the attributes
/// they actually set override. A link inside a heading keeps the heading's
/// other attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextStyles {
    pub body: Style,
    pub h1: Style,
    pub h2: Style,
    pub h3: Style,
    pub h4: Style,
    pub h5: Style,
    pub h6: Style,
    pub code: Style,
    pub link: Style,
    /// Style of the indicator bar drawn down the left edge of block quotes
    pub quote_indicator: Style,
    /// Spaces per indentation level for nested list content
    pub list_indent: u16,
}

impl RichTextStyles {
    /// Derive a full style set from a single base style.
    pub fn from_base(base: Style) -> Self {
        Self {
            body: base,
            h1: base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: base.add_modifier(Modifier::BOLD),
            h3: base.add_modifier(Modifier::BOLD),
            h4: base.add_modifier(Modifier::BOLD),
            h5: base.add_modifier(Modifier::BOLD),
            h6: base.add_modifier(Modifier::BOLD),
            code: Style::new().fg(Color::Cyan),
            link: Style::new().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            quote_indicator: Style::new().fg(Color::DarkGray),
            list_indent: 2,
        }
    }

    /// Look up the style for a heading level.
    ///
    /// A level outside 1-6 is a caller-side contract violation and is
    /// rejected here, at the render boundary.
    pub fn heading(&self, level: u8) -> Result<Style, RenderError> {
        match level {
            1 => Ok(self.h1),
            2 => Ok(self.h2),
            3 => Ok(self.h3),
            4 => Ok(self.h4),
            5 => Ok(self.h5),
            6 => Ok(self.h6),
            _ => Err(RenderError::InvalidHeadingLevel(level)),
        }
    }
}

impl Default for RichTextStyles {
    fn default() -> Self {
        Self::from_base(Style::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_lookup_covers_all_six_levels() {
        let styles = RichTextStyles::default();
        for level in 1..=6 {
            assert!(styles.heading(level).is_ok(), "level {level}");
        }
    }

    #[test]
    fn heading_lookup_rejects_out_of_range_levels() {
        let styles = RichTextStyles::default();
        assert_eq!(styles.heading(0), Err(RenderError::InvalidHeadingLevel(0)));
        assert_eq!(styles.heading(7), Err(RenderError::InvalidHeadingLevel(7)));
    }

    #[test]
    fn from_base_carries_base_into_headings() {
        let base = Style::new().fg(Color::White);
        let styles = RichTextStyles::from_base(base);
        assert_eq!(styles.body, base);
        assert_eq!(styles.h2, base.add_modifier(Modifier::BOLD));
    }
}
