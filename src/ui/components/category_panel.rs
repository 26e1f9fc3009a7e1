//! Category browsing panel.
//!
//! Lists "All" followed by every category in the directory. Moving the
//! selection asks the list view to show that category's questions. A search
//! submitted from the search bar resets the panel to "All", since searching
//! and category browsing are alternative ways of filling the list.

use crate::icons::IconService;
use crate::trivia::CategoryId;
use crate::ui::components::category_directory::CategoryDirectory;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct CategoryPanel {
    pub categories: CategoryDirectory,
    pub icons: IconService,
    selected: Option<CategoryId>,
    list_state: ListState,
}

impl Default for CategoryPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryPanel {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            categories: CategoryDirectory::new(),
            icons: IconService::default(),
            selected: None,
            list_state,
        }
    }

    pub fn update_categories(&mut self, categories: CategoryDirectory) {
        self.categories = categories;
        // A selected category that disappeared falls back to "All"
        if let Some(id) = self.selected {
            if !self.categories.contains(id) {
                self.selected = None;
            }
        }
        self.sync_list_state();
    }

    pub fn selected(&self) -> Option<CategoryId> {
        self.selected
    }

    /// Entries in display order; `None` is "All"
    fn entries(&self) -> Vec<Option<CategoryId>> {
        std::iter::once(None)
            .chain(self.categories.options().into_iter().map(|(id, _)| Some(id)))
            .collect()
    }

    fn selected_position(&self, entries: &[Option<CategoryId>]) -> usize {
        entries.iter().position(|entry| *entry == self.selected).unwrap_or(0)
    }

    fn sync_list_state(&mut self) {
        let entries = self.entries();
        let position = self.selected_position(&entries);
        self.list_state.select(Some(position));
    }

    /// Move the selection by one entry, wrapping around
    pub fn move_selection(&mut self, forward: bool) -> Action {
        let entries = self.entries();
        if entries.len() <= 1 {
            return Action::None;
        }

        let current = self.selected_position(&entries);
        let next = if forward {
            (current + 1) % entries.len()
        } else {
            (current + entries.len() - 1) % entries.len()
        };

        self.selected = entries[next];
        self.list_state.select(Some(next));
        Action::SelectCategory(self.selected)
    }

    /// Return to "All" without requesting a fetch
    pub fn reset(&mut self) {
        self.selected = None;
        self.list_state.select(Some(0));
    }
}

impl Component for CategoryPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') => self.move_selection(true),
            KeyCode::Char('K') => self.move_selection(false),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::SearchQuestions(_) = &action {
            self.reset();
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut items = vec![ListItem::new(format!("{} All", self.icons.category(None)))];
        items.extend(self.categories.options().into_iter().map(|(_, name)| {
            let icon = self.icons.category(Some(&name));
            ListItem::new(format!("{} {}", icon, name))
        }));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} Categories ", self.icons.categories_title()));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
