//! Key hint footer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use siteaudit_app::state::{AppState, Focus};

use crate::theme::styles;

/// Context-sensitive key hints for the bottom row
pub struct KeyHints {
    hints: Vec<(&'static str, &'static str)>,
}

impl KeyHints {
    /// Hints for the control that currently has focus
    pub fn for_state(state: &AppState) -> Self {
        let mut hints = Vec::new();
        if state.email.acknowledgment.is_some() {
            hints.push(("Enter", "Close"));
        } else {
            match state.focus {
                Focus::UrlInput => {
                    if state.scan.can_submit() {
                        hints.push(("Enter", "Scan"));
                    }
                    if state.scan.can_edit() {
                        hints.push(("Ctrl+U", "Clear"));
                    }
                    if state.report_available() {
                        hints.push(("Tab", "Report"));
                    }
                }
                Focus::ReportButton => {
                    hints.push(("Enter", "Get Report"));
                    hints.push(("Tab", "URL"));
                    hints.push(("q", "Quit"));
                }
                Focus::EmailInput => {
                    hints.push(("Enter", "Send"));
                    hints.push(("Esc", "Cancel"));
                }
            }
            if state.scan.results.is_some() {
                hints.push(("↑↓", "Scroll"));
            }
        }
        hints.push(("Ctrl+C", "Quit"));
        Self { hints }
    }

    pub fn hints(&self) -> &[(&'static str, &'static str)] {
        &self.hints
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in &self.hints {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {label}  "), styles::text_muted()));
        }
        Line::from(spans).render(area, buf);
    }
}
