//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Product name shown in the title bar
pub const APP_TITLE: &str = "SiteAudit";
/// Tagline shown next to the title
pub const APP_TAGLINE: &str = "Free Website Accessibility Checker";

/// Main header showing the product name and tagline
#[derive(Default)]
pub struct MainHeader {
    /// Host of the most recent scan target, shown on the right
    scanned_host: Option<String>,
}

impl MainHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scanned_host(mut self, host: Option<String>) -> Self {
        self.scanned_host = host;
        self
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("◆", styles::accent()),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(APP_TAGLINE, styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;
        left.render(inner, buf);

        // Right-aligned host of the last result, when it fits
        if let Some(host) = self.scanned_host {
            let right = Line::from(vec![
                Span::styled(host, styles::text_secondary()),
                Span::raw(" "),
            ]);
            let right_width = right.width() as u16;
            if left_width + right_width + 2 <= inner.width {
                let x = inner.x + inner.width - right_width;
                right.render(Rect::new(x, inner.y, right_width, 1), buf);
            }
        }
    }
}
