//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use siteaudit_app::state::{AppState, Focus, SCANNING_MESSAGE};
use siteaudit_core::display_host;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Height of the report callout under the results
const REPORT_CALLOUT_HEIGHT: u16 = 5;

/// Braille spinner frames, one per tick
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; everything shown is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.show_key_hints);

    let host = state
        .scan
        .results
        .as_ref()
        .map(|result| display_host(&result.url));
    frame.render_widget(
        widgets::MainHeader::new().with_scanned_host(host),
        areas.header,
    );

    frame.render_widget(
        widgets::ScanForm::new(&state.scan).focused(state.focus == Focus::UrlInput),
        areas.scan_form,
    );

    if state.scan.loading {
        render_scanning(frame, state.spinner_frame, areas.body);
    } else if let Some(result) = &state.scan.results {
        let [results_area, callout_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(REPORT_CALLOUT_HEIGHT),
        ])
        .areas(areas.body);

        frame.render_widget(
            widgets::ResultsPanel::new(result).scroll(state.results_scroll),
            results_area,
        );
        frame.render_widget(
            widgets::ReportCallout::new(&state.email)
                .button_focused(state.focus == Focus::ReportButton)
                .input_focused(state.focus == Focus::EmailInput),
            callout_area,
        );
    } else {
        frame.render_widget(widgets::Landing, areas.body);
    }

    if areas.hints.height > 0 {
        frame.render_widget(widgets::KeyHints::for_state(state), areas.hints);
    }

    if let Some(message) = &state.email.acknowledgment {
        frame.render_widget(widgets::AcknowledgmentPopup::new(message), area);
    }
}

/// Spinner and progress message shown in place of results while scanning
fn render_scanning(frame: &mut Frame, spinner_frame: u64, area: Rect) {
    let spinner = SPINNER[(spinner_frame as usize) % SPINNER.len()];

    let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, line_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let line = Line::from(vec![
        Span::styled(spinner, styles::accent_bold()),
        Span::raw(" "),
        Span::styled(SCANNING_MESSAGE, styles::text_secondary()),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        line_area,
    );
}
