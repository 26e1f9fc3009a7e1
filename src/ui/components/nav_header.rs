use crate::constants::TITLE_APP;
use crate::icons::IconService;
use crate::ui::core::{Action, View};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Navigation tabs between the question list and the add form
pub struct NavHeader;

impl NavHeader {
    pub fn handle_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::F(1) => Action::NavigateTo(View::List),
            KeyCode::F(2) => Action::NavigateTo(View::Add),
            _ => Action::None,
        }
    }

    pub fn render(f: &mut Frame, rect: Rect, current: View, icons: &IconService) {
        let titles = vec![
            Line::from(format!("{} List [F1]", icons.questions_title())),
            Line::from(format!("{} Add [F2]", icons.add())),
        ];
        let selected = match current {
            View::List => 0,
            View::Add => 1,
        };

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", TITLE_APP)))
            .select(selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        f.render_widget(tabs, rect);
    }
}
