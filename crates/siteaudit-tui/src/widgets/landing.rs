//! Landing content shown before the first result

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

const FEATURES: [&str; 3] = [
    "WCAG 2.1 Compliant",
    "Industry Standard Tools",
    "Instant Results",
];

/// (figure, claim) pairs for the "why it matters" section
const FACTS: [(&str, &str); 3] = [
    ("1 in 4", "adults have a disability that affects their web use"),
    ("98%", "of websites fail basic accessibility tests"),
    ("$13T", "annual spending power of people with disabilities"),
];

/// Hero text, feature strip and accessibility facts
pub struct Landing;

impl Widget for Landing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));

        let mut lines = vec![
            Line::from(Span::styled(
                "Free Website Accessibility Check",
                styles::accent_bold(),
            )),
            Line::from(Span::styled(
                "Instantly scan your website for accessibility issues.",
                styles::text_secondary(),
            )),
            Line::from(""),
        ];

        let mut feature_spans = Vec::new();
        for (i, feature) in FEATURES.iter().enumerate() {
            if i > 0 {
                feature_spans.push(Span::raw("   "));
            }
            feature_spans.push(Span::styled("✓ ", styles::status_green()));
            feature_spans.push(Span::styled(*feature, styles::text_primary()));
        }
        lines.push(Line::from(feature_spans));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            "Why Website Accessibility Matters",
            styles::accent(),
        )));
        for (figure, claim) in FACTS {
            lines.push(Line::from(vec![
                Span::styled(format!("{figure:>7} "), styles::status_yellow()),
                Span::styled(claim, styles::text_secondary()),
            ]));
        }

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
