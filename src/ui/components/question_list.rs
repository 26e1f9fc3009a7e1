//! Question list view for the Trivialist application.
//!
//! Owns the search bar and the question cards, and tracks the fetch state of
//! the list. Every fetch it issues is tagged with a sequence number so that
//! responses arriving out of order cannot overwrite a newer result.

use crate::constants::{ALERT_DELETE_QUESTION, ALERT_LOAD_QUESTIONS, DEFAULT_PAGE_SIZE};
use crate::icons::IconService;
use crate::trivia::{page_count, QuestionId, QuestionPage, QuestionQuery};
use crate::ui::components::category_directory::CategoryDirectory;
use crate::ui::components::question_card::QuestionCard;
use crate::ui::components::search_bar::SearchBar;
use crate::ui::core::{Action, Component, RequestSeq};
use std::collections::BTreeMap;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

pub struct QuestionListView {
    pub search_bar: SearchBar,
    cards: Vec<QuestionCard>,
    total_count: usize,
    state: FetchState,
    selected_index: usize,
    list_state: ListState,
    pub categories: CategoryDirectory,
    pub icons: IconService,
    last_issued_seq: RequestSeq,
    last_applied_seq: RequestSeq,
    current_query: QuestionQuery,
    // Query behind the questions on screen; paging moves from here
    shown_query: QuestionQuery,
    in_flight: BTreeMap<RequestSeq, QuestionQuery>,
    page_size: usize,
}

impl Default for QuestionListView {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionListView {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            cards: Vec::new(),
            total_count: 0,
            state: FetchState::Idle,
            selected_index: 0,
            list_state: ListState::default(),
            categories: CategoryDirectory::new(),
            icons: IconService::default(),
            last_issued_seq: 0,
            last_applied_seq: 0,
            current_query: QuestionQuery::default(),
            shown_query: QuestionQuery::default(),
            in_flight: BTreeMap::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn update_categories(&mut self, categories: CategoryDirectory) {
        self.categories = categories;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.search_bar.icons = icons.clone();
        self.icons = icons;
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn cards(&self) -> &[QuestionCard] {
        &self.cards
    }

    pub fn question_ids(&self) -> Vec<QuestionId> {
        self.cards.iter().map(QuestionCard::id).collect()
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn current_query(&self) -> &QuestionQuery {
        &self.current_query
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Page of the search on screen, `None` while browsing a category
    pub fn current_page(&self) -> Option<u32> {
        self.shown_query.page()
    }

    /// Pages available for the current search at the last known total
    pub fn page_count(&self) -> u32 {
        page_count(self.total_count, self.page_size)
    }

    /// Fetch the following page of the current search, if there is one
    pub fn next_page(&mut self) -> Action {
        match self.current_page() {
            Some(page) if page < self.page_count() => self.fetch_page(page + 1),
            _ => Action::None,
        }
    }

    /// Fetch the preceding page of the current search, if there is one
    pub fn previous_page(&mut self) -> Action {
        match self.current_page() {
            Some(page) if page > 1 => self.fetch_page(page - 1),
            _ => Action::None,
        }
    }

    fn fetch_page(&mut self, page: u32) -> Action {
        match self.shown_query.with_page(page) {
            Some(query) => self.issue_fetch(query),
            None => Action::None,
        }
    }

    pub fn last_issued_seq(&self) -> RequestSeq {
        self.last_issued_seq
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_bar.is_focused()
    }

    /// The unfiltered fetch issued when the app starts
    pub fn initial_fetch(&mut self) -> Action {
        self.issue_fetch(QuestionQuery::default())
    }

    /// Tag a new fetch and move to Loading. The returned action carries the
    /// request for the owner to run.
    pub fn issue_fetch(&mut self, query: QuestionQuery) -> Action {
        self.last_issued_seq += 1;
        self.state = FetchState::Loading;
        self.current_query = query.clone();
        self.in_flight.insert(self.last_issued_seq, query.clone());
        Action::FetchQuestions {
            seq: self.last_issued_seq,
            query,
        }
    }

    /// Apply a successful fetch unless a newer response was already applied
    pub fn apply_loaded(&mut self, seq: RequestSeq, page: QuestionPage) -> Action {
        let query = self.in_flight.remove(&seq);
        if seq < self.last_applied_seq {
            log::debug!(
                "Discarding stale question page #{} (already showing #{})",
                seq,
                self.last_applied_seq
            );
            return Action::None;
        }

        self.last_applied_seq = seq;
        if let Some(query) = query {
            self.shown_query = query;
        }
        self.cards = page.questions.into_iter().map(QuestionCard::new).collect();
        self.total_count = page.total_questions;
        // Later requests are still in flight
        self.state = if seq >= self.last_issued_seq {
            FetchState::Loaded
        } else {
            FetchState::Loading
        };
        self.selected_index = 0;
        self.update_list_state();
        Action::None
    }

    /// Keep the current questions and raise an alert, unless the failed
    /// request was already superseded by an applied response.
    pub fn apply_failed(&mut self, seq: RequestSeq, error: &str) -> Action {
        self.in_flight.remove(&seq);
        if seq < self.last_applied_seq {
            log::debug!("Ignoring failure of stale question fetch #{}: {}", seq, error);
            return Action::None;
        }

        log::warn!("Question fetch #{} failed: {}", seq, error);
        if seq >= self.last_issued_seq {
            self.state = FetchState::Error;
        }
        Action::ShowAlert(ALERT_LOAD_QUESTIONS.to_string())
    }

    /// Drop the card with `id`. Returns whether anything was removed; the
    /// total only shrinks when a card actually went away.
    pub fn remove_question(&mut self, id: QuestionId) -> bool {
        let Some(position) = self.cards.iter().position(|card| card.id() == id) else {
            return false;
        };

        self.cards.remove(position);
        self.total_count = self.total_count.saturating_sub(1);
        self.update_list_state();
        true
    }

    pub fn select_next(&mut self) {
        if !self.cards.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.cards.len();
            self.update_list_state();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.cards.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.cards.len() - 1
            } else {
                self.selected_index - 1
            };
            self.update_list_state();
        }
    }

    fn update_list_state(&mut self) {
        if self.cards.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.cards.len() {
                self.selected_index = self.cards.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn title(&self) -> String {
        let status = match self.state {
            FetchState::Loading => format!(" {}", self.icons.loading()),
            FetchState::Error => format!(" {}", self.icons.error()),
            FetchState::Idle | FetchState::Loaded => String::new(),
        };
        let label = match self.current_page() {
            Some(page) if self.page_count() > 1 => {
                format!("{}, page {}/{}", self.shown_query.subject(), page, self.page_count())
            }
            _ => self.current_query.describe(),
        };
        format!(
            " {} Questions ({}) - {}{} ",
            self.icons.questions_title(),
            self.total_count,
            label,
            status
        )
    }
}

impl Component for QuestionListView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.search_bar.is_focused() {
            return self.search_bar.handle_key_events(key);
        }

        match key.code {
            KeyCode::Char('/') => {
                self.search_bar.on_focus();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('d') | KeyCode::Delete => {
                match self.cards.get_mut(self.selected_index) {
                    Some(card) => card.handle_key(key),
                    None => Action::None,
                }
            }
            KeyCode::Char('n') | KeyCode::PageDown => self.next_page(),
            KeyCode::Char('p') | KeyCode::PageUp => self.previous_page(),
            KeyCode::Char('G') => Action::ShowLogs(true),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SearchQuestions(query) => self.issue_fetch(QuestionQuery::search(query)),
            Action::SelectCategory(selection) => {
                self.search_bar.set_query("");
                match selection {
                    Some(id) => self.issue_fetch(QuestionQuery::Category(id)),
                    None => self.issue_fetch(QuestionQuery::default()),
                }
            }
            Action::QuestionsLoaded { seq, page } => self.apply_loaded(seq, page),
            Action::QuestionsFailed { seq, error } => self.apply_failed(seq, &error),
            Action::QuestionDeleted(id) => {
                if !self.remove_question(id) {
                    log::debug!("Deleted question {} was no longer listed", id);
                }
                Action::None
            }
            Action::DeleteFailed { id, error } => {
                log::warn!("Delete of question {} failed: {}", id, error);
                Action::ShowAlert(ALERT_DELETE_QUESTION.to_string())
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(rect);

        self.search_bar.render(f, chunks[0]);

        let block = Block::default().borders(Borders::ALL).title(self.title());

        if self.cards.is_empty() {
            let empty_message = match self.state {
                FetchState::Idle | FetchState::Loading => "Loading questions...",
                FetchState::Error => "Questions could not be loaded.",
                FetchState::Loaded => "No questions found. Press 'a' to add one.",
            };
            let empty_list = List::new(vec![ListItem::new(empty_message)]).block(block);
            f.render_widget(empty_list, chunks[1]);
            return;
        }

        let items: Vec<ListItem> = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| card.to_list_item(index == self.selected_index, &self.categories, &self.icons))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}
