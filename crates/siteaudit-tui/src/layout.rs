//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;
/// Scan form: border + input row + status row + border
const SCAN_FORM_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,
    /// URL field, submit button and inline status
    pub scan_form: Rect,
    /// Scan results, spinner, or the landing blurb
    pub body: Rect,
    /// Key hint bar; zero height when hidden
    pub hints: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_hints` - Reserve a bottom row for the key hint bar
pub fn create(area: Rect, show_hints: bool) -> ScreenAreas {
    let hints_height = u16::from(show_hints);

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SCAN_FORM_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(hints_height),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        scan_form: chunks[1],
        body: chunks[2],
        hints: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_with_hints() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.scan_form.height, 4);
        assert_eq!(layout.scan_form.y, 3);
        assert_eq!(layout.body.y, 7);
        assert_eq!(layout.body.height, 16); // 24 - 3 - 4 - 1
        assert_eq!(layout.hints.height, 1);
        assert_eq!(layout.hints.y, 23);
    }

    #[test]
    fn test_create_layout_without_hints() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert_eq!(layout.hints.height, 0);
        assert_eq!(layout.body.height, 17);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        for show_hints in [true, false] {
            let layout = create(area, show_hints);
            assert_eq!(
                layout.header.height
                    + layout.scan_form.height
                    + layout.body.height
                    + layout.hints.height,
                area.height
            );
        }
    }
}
