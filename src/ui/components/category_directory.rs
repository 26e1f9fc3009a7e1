//! Category directory shared by the list, the panel and the form.
//!
//! The directory is loaded once at startup. A failed load leaves it empty and
//! every consumer falls back gracefully: names resolve to "unknown" and the
//! form's category selector has no options. There is no automatic retry.

use crate::constants::{ALERT_LOAD_CATEGORIES, UNKNOWN_CATEGORY};
use crate::trivia::{Category, CategoryId};
use crate::ui::core::Action;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryDirectory {
    names: BTreeMap<CategoryId, String>,
    state: LoadState,
}

impl CategoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Replace the mapping with a freshly fetched one
    pub fn apply_loaded(&mut self, categories: Vec<Category>) {
        self.names = categories
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();
        self.state = LoadState::Loaded;
    }

    pub fn apply_failed(&mut self, error: &str) {
        log::warn!("Category load failed: {}", error);
        self.names.clear();
        self.state = LoadState::Failed;
    }

    /// Display name for `id`, or "unknown" when the directory lacks it
    pub fn name_of(&self, id: CategoryId) -> &str {
        self.names.get(&id).map(String::as_str).unwrap_or(UNKNOWN_CATEGORY)
    }

    /// `(id, name)` pairs ordered by id, used as select options
    pub fn options(&self) -> Vec<(CategoryId, String)> {
        self.names.iter().map(|(id, name)| (*id, name.clone())).collect()
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.names.contains_key(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn update(&mut self, action: Action) -> Action {
        match action {
            Action::LoadCategories => {
                self.begin_load();
                action
            }
            Action::CategoriesLoaded(categories) => {
                self.apply_loaded(categories);
                Action::None
            }
            Action::CategoriesFailed(error) => {
                self.apply_failed(&error);
                Action::ShowAlert(ALERT_LOAD_CATEGORIES.to_string())
            }
            _ => action,
        }
    }
}
