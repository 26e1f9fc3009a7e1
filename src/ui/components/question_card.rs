use crate::icons::IconService;
use crate::trivia::{Question, QuestionId};
use crate::ui::components::category_directory::CategoryDirectory;
use crate::ui::core::Action;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One question in the list. The question itself never changes while the
/// card exists; only the answer visibility is local state.
#[derive(Debug, Clone)]
pub struct QuestionCard {
    question: Question,
    revealed: bool,
}

impl QuestionCard {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            revealed: false,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn id(&self) -> QuestionId {
        self.question.id
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Deletion is requested straight away, there is no confirmation step
    pub fn request_delete(&self) -> Action {
        Action::DeleteQuestion(self.question.id)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_reveal();
                Action::None
            }
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            _ => Action::None,
        }
    }

    pub fn to_list_item(&self, selected: bool, categories: &CategoryDirectory, icons: &IconService) -> ListItem<'static> {
        let category_name = categories.name_of(self.question.category).to_string();
        let category_icon = icons.category(Some(&category_name));

        let text_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", category_icon)),
                Span::styled(self.question.text.clone(), text_style),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(category_name, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("  {} Difficulty: {}", icons.difficulty(), self.question.difficulty),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ];

        let mut answer_line = if self.revealed {
            vec![
                Span::raw(format!("   {} ", icons.answer_toggle(true))),
                Span::styled(
                    format!("Answer: {}", self.question.answer),
                    Style::default().fg(Color::Green),
                ),
            ]
        } else {
            vec![Span::styled(
                format!("   {} Show Answer", icons.answer_toggle(false)),
                Style::default().fg(Color::DarkGray),
            )]
        };
        if selected {
            answer_line.push(Span::styled(
                format!("  {} d: delete", icons.delete()),
                Style::default().fg(Color::Red),
            ));
        }
        lines.push(Line::from(answer_line));

        ListItem::new(lines)
    }
}
