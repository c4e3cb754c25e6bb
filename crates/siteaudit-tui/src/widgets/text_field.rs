//! Single-line text field

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

/// One line of editable text with a placeholder and a block cursor.
///
/// When the value is wider than the area, the tail is shown so the cursor
/// stays visible.
pub struct TextField<'a> {
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    disabled: bool,
}

impl<'a> TextField<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            placeholder: "",
            focused: false,
            disabled: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Suffix of `value` that fits in `width` columns, leaving one for the cursor
    fn visible_tail(&self, width: usize) -> &'a str {
        let budget = width.saturating_sub(1);
        if self.value.width() <= budget {
            return self.value;
        }
        let mut start = self.value.len();
        let mut used = 0;
        for (idx, ch) in self.value.char_indices().rev() {
            let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > budget {
                break;
            }
            used += w;
            start = idx;
        }
        &self.value[start..]
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text_style = if self.disabled {
            styles::text_muted()
        } else {
            styles::text_primary()
        };

        let mut spans = Vec::new();
        if self.value.is_empty() && !self.placeholder.is_empty() {
            if self.focused {
                spans.push(Span::styled("_", styles::accent()));
            }
            spans.push(Span::styled(self.placeholder, styles::text_muted()));
        } else {
            spans.push(Span::styled(
                self.visible_tail(area.width as usize),
                text_style,
            ));
            if self.focused && !self.disabled {
                spans.push(Span::styled("_", styles::accent()));
            }
        }

        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_placeholder_when_empty() {
        let mut term = TestTerminal::with_size(30, 1);
        let field = TextField::new("").placeholder("yourwebsite.com");
        term.render_widget(field, term.area());
        assert!(term.buffer_contains("yourwebsite.com"));
    }

    #[test]
    fn test_value_with_cursor_when_focused() {
        let mut term = TestTerminal::with_size(30, 1);
        let field = TextField::new("example.com")
            .placeholder("yourwebsite.com")
            .focused(true);
        term.render_widget(field, term.area());
        assert!(term.buffer_contains("example.com_"));
        assert!(!term.buffer_contains("yourwebsite.com"));
    }

    #[test]
    fn test_long_value_shows_tail() {
        let mut term = TestTerminal::with_size(10, 1);
        let field = TextField::new("https://very-long-domain.example").focused(true);
        term.render_widget(field, term.area());
        assert!(term.buffer_contains(".example_"));
        assert!(!term.buffer_contains("https"));
    }

    #[test]
    fn test_disabled_hides_cursor() {
        let mut term = TestTerminal::with_size(30, 1);
        let field = TextField::new("example.com").focused(true).disabled(true);
        term.render_widget(field, term.area());
        assert!(term.buffer_contains("example.com"));
        assert!(!term.buffer_contains("example.com_"));
    }
}
