//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::icons::IconService;
use crate::ui::components::question_form::FormStatus;
use crate::ui::components::question_list::FetchState;
use crate::ui::core::View;

/// What the status bar reflects about the running app
pub struct StatusInfo {
    pub view: View,
    pub pending_requests: usize,
    pub fetch_state: FetchState,
    pub form_status: FormStatus,
    pub search_focused: bool,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo, icons: &IconService) {
        let status_text = match info.view {
            View::Add if info.form_status == FormStatus::Submitting => {
                format!("{} Adding question...", icons.loading())
            }
            View::List if info.fetch_state == FetchState::Loading => {
                format!("{} Loading questions...", icons.loading())
            }
            View::List if info.search_focused => "Enter: search • Esc: cancel".to_string(),
            View::List => {
                "/: search • J/K: category • n/p: page • Space: show answer • d: delete • a: add • i: icons • G: logs • q: quit"
                    .to_string()
            }
            View::Add => "Tab: next field • ←/→: choose • Enter: submit • Esc: back".to_string(),
        };

        let status_text = if info.pending_requests > 1 {
            format!("{}  ({} requests pending)", status_text, info.pending_requests)
        } else {
            status_text
        };

        let status_color = if info.fetch_state == FetchState::Error {
            Color::Red
        } else if info.pending_requests > 0 {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
