use crate::constants::SEARCH_PLACEHOLDER;
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Single-line search input above the question list.
///
/// Typing only edits the recorded value; a search is requested once per
/// Enter, with the value exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    query: String,
    focused: bool,
    pub icons: IconService,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Request a search for the recorded value, untrimmed
    pub fn submit(&mut self) -> Action {
        Action::SearchQuestions(self.query.clone())
    }
}

impl Component for SearchBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Enter => {
                self.on_blur();
                self.submit()
            }
            KeyCode::Esc => {
                self.on_blur();
                Action::None
            }
            KeyCode::Backspace => {
                self.query.pop();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Yellow } else { Color::Gray };

        let mut spans = vec![Span::raw(format!("{} ", self.icons.search()))];
        if self.query.is_empty() && !self.focused {
            spans.push(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::styled(self.query.as_str(), Style::default().fg(Color::White)));
        }
        if self.focused {
            spans.push(Span::styled("█", Style::default().fg(Color::White)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Search (/) ")
            .style(Style::default().fg(border_color));

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
