//! Layout management and calculations

use crate::constants::{CATEGORY_PANEL_MAX_WIDTH, CATEGORY_PANEL_MIN_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header tabs, body and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Split the list view body into the category panel and the question list.
    ///
    /// The panel never takes more than a third of the width so the list stays usable
    /// on narrow terminals.
    #[must_use]
    pub fn body_layout(area: Rect, panel_width: u16) -> Vec<Rect> {
        let panel_width = panel_width
            .clamp(CATEGORY_PANEL_MIN_WIDTH, CATEGORY_PANEL_MAX_WIDTH)
            .min(area.width / 3);
        let list_width = area.width.saturating_sub(panel_width);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(panel_width), Constraint::Length(list_width)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(height_lines), Constraint::Min(0)])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
