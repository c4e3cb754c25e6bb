//! Scan form: URL field, submit button, inline error

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use siteaudit_app::state::ScanState;

use super::TextField;
use crate::theme::{palette, styles};

pub const SUBMIT_LABEL: &str = "Scan Now";
pub const SUBMIT_LABEL_BUSY: &str = "Scanning...";
pub const URL_PLACEHOLDER: &str = "yourwebsite.com";

/// Scan form bound to the controller's [`ScanState`]
pub struct ScanForm<'a> {
    scan: &'a ScanState,
    focused: bool,
}

impl<'a> ScanForm<'a> {
    pub fn new(scan: &'a ScanState) -> Self {
        Self {
            scan,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn button_label(&self) -> String {
        let label = if self.scan.loading {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL
        };
        format!("[ {label} ]")
    }

    fn button_style(&self) -> Style {
        if !self.scan.can_submit() {
            styles::button_disabled()
        } else if self.focused {
            styles::button_focused()
        } else {
            styles::button_idle()
        }
    }

    fn status_line(&self) -> Line<'a> {
        if let Some(error) = &self.scan.error {
            Line::from(vec![
                Span::styled("✗ ", styles::status_red()),
                Span::styled(error.as_str(), styles::status_red()),
            ])
        } else if self.scan.loading {
            Line::from(Span::styled(
                "Scan in progress, the URL is locked until it finishes",
                styles::text_muted(),
            ))
        } else {
            Line::from(Span::styled(
                "Enter a domain or full URL; https:// is added when missing",
                styles::text_muted(),
            ))
        }
    }
}

impl Widget for ScanForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" Website URL to scan ", styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let label = self.button_label();
        let button_width = label.width() as u16;
        let [field_area, _, button_area] = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(button_width),
        ])
        .areas(Rect::new(inner.x, inner.y, inner.width, 1));

        TextField::new(&self.scan.url)
            .placeholder(URL_PLACEHOLDER)
            .focused(self.focused)
            .disabled(!self.scan.can_edit())
            .render(field_area, buf);

        Line::from(Span::styled(label, self.button_style())).render(button_area, buf);

        if inner.height >= 2 {
            let status_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            self.status_line().render(status_area, buf);
        }
    }
}
