//! Scan results panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use siteaudit_core::{score_label, score_tone, Issue, IssueKind, ScanResult};

use crate::theme::{palette, styles};

/// Summary and issue list of one completed scan
pub struct ResultsPanel<'a> {
    result: &'a ScanResult,
    scroll: u16,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(result: &'a ScanResult) -> Self {
        Self { result, scroll: 0 }
    }

    /// First content line shown at the top of the panel
    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    fn summary_line(&self) -> Line<'a> {
        let summary = &self.result.summary;
        let score = i64::from(summary.score);
        let tone = styles::score_tone(score_tone(score));
        let sep = || Span::styled("  │  ", styles::text_muted());

        Line::from(vec![
            Span::styled("Score ", styles::text_secondary()),
            Span::styled(format!("{}%", summary.score), tone),
            Span::raw(" "),
            Span::styled(score_label(score), tone),
            sep(),
            Span::styled("Errors ", styles::text_secondary()),
            Span::styled(summary.errors.to_string(), styles::status_red()),
            sep(),
            Span::styled("Warnings ", styles::text_secondary()),
            Span::styled(summary.warnings.to_string(), styles::status_yellow()),
            sep(),
            Span::styled("Passed ", styles::text_secondary()),
            Span::styled(summary.passed.to_string(), styles::status_green()),
        ])
    }

    fn issue_lines(issue: &'a Issue) -> [Line<'a>; 2] {
        let (icon, icon_style) = match issue.kind {
            IssueKind::Error => ("✗", styles::status_red()),
            IssueKind::Warning => ("⚠", styles::status_yellow()),
        };
        [
            Line::from(vec![
                Span::styled(icon, icon_style),
                Span::raw(" "),
                Span::styled(issue.description.as_str(), styles::text_primary()),
                Span::raw("  "),
                Span::styled(format!("{} Impact", issue.impact), styles::impact(issue.impact)),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(issue.help.as_str(), styles::text_secondary()),
                Span::styled(format!("  Rule: {}", issue.rule), styles::text_muted()),
            ]),
        ]
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(
                " Accessibility Scan Results ",
                styles::accent_bold(),
            ))
            .style(Style::default().bg(palette::CARD_BG));

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Scanned: ", styles::text_muted()),
                Span::styled(self.result.url.as_str(), styles::text_primary()),
            ]),
            self.summary_line(),
            Line::from(""),
        ];
        for issue in &self.result.issues {
            lines.extend(Self::issue_lines(issue));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use siteaudit_core::{sample_issues, ScanSummary};

    fn result(score: u32) -> ScanResult {
        ScanResult::new(
            "https://example.com",
            ScanSummary {
                errors: 3,
                warnings: 7,
                passed: 21,
                score,
            },
            sample_issues(),
        )
    }

    fn render(result: &ScanResult) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 16);
        term.render_widget(ResultsPanel::new(result), term.area());
        term
    }

    #[test]
    fn test_results_show_url_and_counts() {
        let term = render(&result(87));
        assert!(term.buffer_contains("Scanned: https://example.com"));
        assert!(term.buffer_contains("87%"));
        assert!(term.buffer_contains("Errors 3"));
        assert!(term.buffer_contains("Warnings 7"));
        assert!(term.buffer_contains("Passed 21"));
    }

    #[test]
    fn test_results_label_follows_score() {
        assert!(render(&result(87)).buffer_contains("Good"));
        assert!(render(&result(65)).buffer_contains("Needs Work"));
    }

    #[test]
    fn test_results_list_every_issue() {
        let term = render(&result(70));
        assert!(term.buffer_contains("Insufficient color contrast ratio detected"));
        assert!(term.buffer_contains("Critical Impact"));
        assert!(term.buffer_contains("Rule: alt-text-missing"));
        assert!(term.buffer_contains("Rule: form-labels"));
    }

    #[test]
    fn test_scroll_moves_issue_list_up() {
        let result = result(70);
        let mut term = TestTerminal::with_size(120, 6);
        term.render_widget(ResultsPanel::new(&result).scroll(7), term.area());

        assert!(!term.buffer_contains("Scanned: https://example.com"));
        assert!(!term.buffer_contains("Rule: alt-text-missing"));
        assert!(term.buffer_contains("Heading levels skip from H1 to H3"));
        assert!(term.buffer_contains("Rule: form-labels"));
    }

    #[test]
    fn test_score_uses_tone_color() {
        let mut term = TestTerminal::with_size(120, 16);
        let result = result(90);
        term.render_widget(ResultsPanel::new(&result), term.area());

        // Locate the "9" of "90%" on the summary row (inside the border)
        let row = 2;
        let x = (0..120)
            .find(|&x| term.cell_at(x, row) == Some("9"))
            .expect("score digit rendered");
        assert_eq!(term.buffer()[(x, row)].fg, palette::STATUS_GREEN);
    }
}
