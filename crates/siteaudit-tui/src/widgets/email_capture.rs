//! Report call-to-action, email form and acknowledgment popup

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use siteaudit_app::email::INVALID_EMAIL_MESSAGE;
use siteaudit_app::state::EmailCapture;

use super::modal_overlay::{centered_rect, dim_background};
use super::TextField;
use crate::theme::{palette, styles};

pub const REPORT_BUTTON_LABEL: &str = "Get Free PDF Report";
pub const SEND_BUTTON_LABEL: &str = "Send Report";
pub const EMAIL_PLACEHOLDER: &str = "Enter your email";
const NO_SPAM_NOTE: &str = "We will never spam you. One-time report delivery only.";

/// The "Get Free PDF Report" call-to-action, or the email form once opened
pub struct ReportCallout<'a> {
    email: &'a EmailCapture,
    button_focused: bool,
    input_focused: bool,
}

impl<'a> ReportCallout<'a> {
    pub fn new(email: &'a EmailCapture) -> Self {
        Self {
            email,
            button_focused: false,
            input_focused: false,
        }
    }

    pub fn button_focused(mut self, focused: bool) -> Self {
        self.button_focused = focused;
        self
    }

    pub fn input_focused(mut self, focused: bool) -> Self {
        self.input_focused = focused;
        self
    }

    fn render_button(&self, inner: Rect, buf: &mut Buffer) {
        let button_style = if self.button_focused {
            styles::button_focused()
        } else {
            styles::button_idle()
        };
        let lines = vec![
            Line::from(Span::styled(
                "Get a comprehensive report with step-by-step fix instructions.",
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                format!("[ {REPORT_BUTTON_LABEL} ]"),
                button_style,
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    fn render_form(&self, inner: Rect, buf: &mut Buffer) {
        let send_label = format!("[ {SEND_BUTTON_LABEL} ]");
        let [label_area, field_area, _, send_area] = Layout::horizontal([
            Constraint::Length(7),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(send_label.width() as u16),
        ])
        .areas(Rect::new(inner.x, inner.y, inner.width, 1));

        Line::from(Span::styled("Email:", styles::text_secondary())).render(label_area, buf);
        TextField::new(&self.email.email)
            .placeholder(EMAIL_PLACEHOLDER)
            .focused(self.input_focused)
            .render(field_area, buf);
        Line::from(Span::styled(send_label, styles::button_idle())).render(send_area, buf);

        if inner.height >= 2 {
            let note = if self.email.invalid {
                Span::styled(INVALID_EMAIL_MESSAGE, styles::status_red())
            } else {
                Span::styled(NO_SPAM_NOTE, styles::text_muted())
            };
            Line::from(note).render(Rect::new(inner.x, inner.y + 1, inner.width, 1), buf);
        }
    }
}

impl Widget for ReportCallout<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.button_focused || self.input_focused)
            .title(Span::styled(
                " Want a Detailed PDF Report? ",
                styles::accent_bold(),
            ))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.email.visible {
            self.render_form(inner, buf);
        } else {
            self.render_button(inner, buf);
        }
    }
}

/// Popup confirming that a report request was accepted
pub struct AcknowledgmentPopup<'a> {
    message: &'a str,
}

impl<'a> AcknowledgmentPopup<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for AcknowledgmentPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let width = u16::try_from(self.message.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .clamp(30, 72);
        let popup = centered_rect(width, 6, area);
        Clear.render(popup, buf);

        let lines = vec![
            Line::from(Span::styled(self.message, styles::text_primary())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" to continue", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines)
            .block(styles::modal_block(" Report Requested "))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
