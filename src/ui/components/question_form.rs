//! Add-question form.
//!
//! The form edits a [`Draft`] field by field. Submitting is refused while
//! either free-text field is empty; the offending field is highlighted and no
//! request is made. While a submission is in flight further submits are
//! ignored. On success the draft resets to its defaults and a notice is shown
//! until the user dismisses it; on failure the draft is kept exactly as typed.

use crate::constants::{
    ALERT_ADD_QUESTION, MAX_DIFFICULTY, MIN_DIFFICULTY, NOTICE_QUESTION_ADDED, TITLE_ADD_FORM,
};
use crate::icons::IconService;
use crate::trivia::{CategoryId, Draft};
use crate::ui::components::category_directory::CategoryDirectory;
use crate::ui::components::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, create_selection_paragraph,
    shortcuts,
};
use crate::ui::core::{Action, Component, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Question,
    Answer,
    Difficulty,
    Category,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            Self::Question => Self::Answer,
            Self::Answer => Self::Difficulty,
            Self::Difficulty => Self::Category,
            Self::Category => Self::Question,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Question => Self::Category,
            Self::Answer => Self::Question,
            Self::Difficulty => Self::Answer,
            Self::Category => Self::Difficulty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
}

pub struct QuestionForm {
    draft: Draft,
    field: FormField,
    status: FormStatus,
    show_success: bool,
    invalid_field: Option<FormField>,
    pub categories: CategoryDirectory,
    pub icons: IconService,
}

impl Default for QuestionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionForm {
    pub fn new() -> Self {
        Self {
            draft: Draft::default(),
            field: FormField::default(),
            status: FormStatus::default(),
            show_success: false,
            invalid_field: None,
            categories: CategoryDirectory::new(),
            icons: IconService::default(),
        }
    }

    pub fn update_categories(&mut self, categories: CategoryDirectory) {
        self.categories = categories;
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn field(&self) -> FormField {
        self.field
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn show_success(&self) -> bool {
        self.show_success
    }

    pub fn invalid_field(&self) -> Option<FormField> {
        self.invalid_field
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.draft.question = question.into();
        self.clear_invalid(FormField::Question);
    }

    pub fn set_answer(&mut self, answer: impl Into<String>) {
        self.draft.answer = answer.into();
        self.clear_invalid(FormField::Answer);
    }

    pub fn set_difficulty(&mut self, difficulty: u8) {
        self.draft.set_difficulty(difficulty);
    }

    pub fn set_category(&mut self, category: CategoryId) {
        self.draft.category = category;
    }

    pub fn focus_field(&mut self, field: FormField) {
        self.field = field;
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn previous_field(&mut self) {
        self.field = self.field.previous();
    }

    /// Category options, exactly the directory entries keyed by id
    pub fn category_options(&self) -> Vec<(CategoryId, String)> {
        self.categories.options()
    }

    pub fn difficulty_options() -> Vec<u8> {
        (MIN_DIFFICULTY..=MAX_DIFFICULTY).collect()
    }

    pub fn input_char(&mut self, c: char) {
        match self.field {
            FormField::Question => {
                self.draft.question.push(c);
                self.clear_invalid(FormField::Question);
            }
            FormField::Answer => {
                self.draft.answer.push(c);
                self.clear_invalid(FormField::Answer);
            }
            FormField::Difficulty | FormField::Category => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            FormField::Question => {
                self.draft.question.pop();
            }
            FormField::Answer => {
                self.draft.answer.pop();
            }
            FormField::Difficulty | FormField::Category => {}
        }
    }

    /// Cycle the focused select forward
    pub fn select_next_option(&mut self) {
        self.cycle_option(true);
    }

    /// Cycle the focused select backward
    pub fn select_previous_option(&mut self) {
        self.cycle_option(false);
    }

    fn cycle_option(&mut self, forward: bool) {
        match self.field {
            FormField::Difficulty => {
                let d = self.draft.difficulty;
                self.draft.difficulty = if forward {
                    if d >= MAX_DIFFICULTY {
                        MIN_DIFFICULTY
                    } else {
                        d + 1
                    }
                } else if d <= MIN_DIFFICULTY {
                    MAX_DIFFICULTY
                } else {
                    d - 1
                };
            }
            FormField::Category => {
                let options = self.category_options();
                if options.is_empty() {
                    return;
                }
                // A draft category missing from the directory starts from the ends
                let next = match options.iter().position(|(id, _)| *id == self.draft.category) {
                    Some(i) if forward => (i + 1) % options.len(),
                    Some(i) => (i + options.len() - 1) % options.len(),
                    None if forward => 0,
                    None => options.len() - 1,
                };
                self.draft.category = options[next].0;
            }
            FormField::Question | FormField::Answer => {}
        }
    }

    fn clear_invalid(&mut self, field: FormField) {
        if self.invalid_field == Some(field) {
            self.invalid_field = None;
        }
    }

    /// Validate and hand the draft off for submission.
    ///
    /// Returns `None` when the submit is refused: either a request is already
    /// in flight or a required field is empty (which is then highlighted).
    pub fn submit(&mut self) -> Option<Action> {
        if self.status == FormStatus::Submitting {
            return None;
        }

        if self.draft.question.is_empty() {
            self.invalid_field = Some(FormField::Question);
            self.field = FormField::Question;
            return None;
        }
        if self.draft.answer.is_empty() {
            self.invalid_field = Some(FormField::Answer);
            self.field = FormField::Answer;
            return None;
        }

        self.invalid_field = None;
        self.status = FormStatus::Submitting;
        Some(Action::SubmitQuestion(self.draft.clone()))
    }

    /// Dismiss the success notice
    pub fn hide_alert(&mut self) {
        self.show_success = false;
    }

    fn render_notice(&self, f: &mut Frame, rect: Rect) {
        let line = if self.status == FormStatus::Submitting {
            Line::styled(
                format!("{} Submitting...", self.icons.loading()),
                Style::default().fg(Color::Yellow),
            )
        } else if self.show_success {
            Line::styled(
                format!("{} {} (Esc to dismiss)", self.icons.success(), NOTICE_QUESTION_ADDED),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Line::default()
        };
        f.render_widget(Paragraph::new(line), rect);
    }
}

impl Component for QuestionForm {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                if self.show_success {
                    self.hide_alert();
                    Action::None
                } else {
                    Action::NavigateTo(View::List)
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                Action::None
            }
            KeyCode::Right => {
                self.select_next_option();
                Action::None
            }
            KeyCode::Left => {
                self.select_previous_option();
                Action::None
            }
            KeyCode::Enter => self.submit().unwrap_or(Action::None),
            KeyCode::Backspace => {
                self.backspace();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_char(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::QuestionAdded => {
                self.draft = Draft::default();
                self.field = FormField::Question;
                self.invalid_field = None;
                self.status = FormStatus::Editing;
                self.show_success = true;
                Action::None
            }
            Action::AddFailed(error) => {
                log::warn!("Adding question failed: {}", error);
                self.status = FormStatus::Editing;
                self.show_success = false;
                Action::ShowAlert(ALERT_ADD_QUESTION.to_string())
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(" {} {} ", self.icons.add(), TITLE_ADD_FORM);
        let block = create_dialog_block(&title, Color::Cyan);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Question
                Constraint::Length(3), // Answer
                Constraint::Length(3), // Difficulty
                Constraint::Length(3), // Category
                Constraint::Length(1), // Notice
                Constraint::Min(0),
                Constraint::Length(1), // Instructions
            ])
            .split(inner);

        let invalid = self.invalid_field;
        f.render_widget(
            create_input_paragraph(
                &self.draft.question,
                "Question",
                self.field == FormField::Question,
                invalid == Some(FormField::Question),
            ),
            chunks[0],
        );
        f.render_widget(
            create_input_paragraph(
                &self.draft.answer,
                "Answer",
                self.field == FormField::Answer,
                invalid == Some(FormField::Answer),
            ),
            chunks[1],
        );
        f.render_widget(
            create_selection_paragraph(
                self.draft.difficulty.to_string(),
                "Difficulty",
                self.field == FormField::Difficulty,
            ),
            chunks[2],
        );

        let category_display = if self.categories.is_empty() {
            "No categories available".to_string()
        } else {
            self.categories.name_of(self.draft.category).to_string()
        };
        f.render_widget(
            create_selection_paragraph(category_display, "Category", self.field == FormField::Category),
            chunks[3],
        );

        self.render_notice(f, chunks[4]);

        let instructions = create_instructions_paragraph(&[
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::ARROWS_CHOOSE,
            shortcuts::SEPARATOR,
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_BACK,
        ]);
        f.render_widget(instructions, chunks[6]);
    }
}
