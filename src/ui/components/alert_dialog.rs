use crate::constants::TITLE_ALERT;
use crate::icons::IconService;
use crate::ui::components::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};
use std::collections::VecDeque;

/// Modal alert for failed requests.
///
/// Alerts queue up so that each failure is shown exactly once, and every
/// alert blocks input until it is dismissed.
#[derive(Debug, Default)]
pub struct AlertDialog {
    queue: VecDeque<String>,
    pub icons: IconService,
}

impl AlertDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn current(&self) -> Option<&str> {
        self.queue.front().map(String::as_str)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Component for AlertDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::DismissAlert,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowAlert(message) => {
                self.queue.push_back(message);
                Action::None
            }
            Action::DismissAlert => {
                self.queue.pop_front();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(message) = self.queue.front() else {
            return;
        };

        let title = format!(" {} {} ", self.icons.error(), TITLE_ALERT);
        let block = create_dialog_block(&title, Color::Red);
        let inner = block.inner(rect);

        f.render_widget(Clear, rect);
        f.render_widget(block, rect);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let text = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(text, chunks[0]);
        f.render_widget(create_instructions_paragraph(&[shortcuts::ENTER_DISMISS]), chunks[1]);
    }
}
