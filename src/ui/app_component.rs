use crate::backend::TriviaBackend;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::logs_dialog::LogsDialog;
use crate::ui::components::status_bar::StatusInfo;
use crate::ui::components::{
    AlertDialog, CategoryDirectory, CategoryPanel, NavHeader, QuestionForm, QuestionListView, StatusBar,
};
use crate::ui::core::{Action, AppContext, Component, EventType, TaskManager, View};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: View,
    pub show_logs: bool,
}

/// Root component: owns every child, runs backend requests and routes input.
///
/// Actions flow through the children in a fixed order (directory, panel,
/// list, form, alert). Whatever survives the chain is handled here, which is
/// where requests get spawned and navigation happens.
pub struct AppComponent {
    // Component composition
    directory: CategoryDirectory,
    panel: CategoryPanel,
    list: QuestionListView,
    form: QuestionForm,
    alert: AlertDialog,

    // Application state
    state: AppState,

    // Services
    backend: Arc<dyn TriviaBackend>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,
    panel_width: u16,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(context: AppContext) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let icons = context.icons.clone();

        context.logger.log(format!(
            "AppComponent: Using {} backend, icon theme {:?}",
            context.backend.backend_type(),
            icons.theme()
        ));

        let mut app = Self {
            directory: CategoryDirectory::new(),
            panel: CategoryPanel::new(),
            list: QuestionListView::new(),
            form: QuestionForm::new(),
            alert: AlertDialog::new(),
            state: AppState::default(),
            backend: context.backend,
            task_manager,
            background_action_rx,
            logger: context.logger,
            icons,
            panel_width: context.config.ui.category_panel_width,
            should_quit: false,
        };
        app.list.set_page_size(context.config.api.page_size);
        app.apply_icons();
        app
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    /// Hand the current icon theme to every child
    fn apply_icons(&mut self) {
        self.list.set_icons(self.icons.clone());
        self.panel.icons = self.icons.clone();
        self.form.icons = self.icons.clone();
        self.alert.icons = self.icons.clone();
    }

    /// Issue the startup requests: the category directory and the unfiltered list
    pub fn mount(&mut self) {
        self.logger.log("AppComponent: Loading categories and questions".to_string());
        self.dispatch(Action::LoadCategories);
        let fetch = self.list.initial_fetch();
        self.dispatch(fetch);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn is_showing_logs(&self) -> bool {
        self.state.show_logs
    }

    pub fn directory(&self) -> &CategoryDirectory {
        &self.directory
    }

    pub fn list(&self) -> &QuestionListView {
        &self.list
    }

    pub fn form(&self) -> &QuestionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut QuestionForm {
        &mut self.form
    }

    pub fn panel(&self) -> &CategoryPanel {
        &self.panel
    }

    pub fn alert(&self) -> &AlertDialog {
        &self.alert
    }

    /// Run an action through the children, then through app-level handling
    pub fn dispatch(&mut self, action: Action) {
        if action.is_none() {
            return;
        }

        let action = self.update(action);
        let _final_action = self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.panel.update_categories(self.directory.clone());
        self.list.update_categories(self.directory.clone());
        self.form.update_categories(self.directory.clone());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('a') => {
                self.logger.log("Global key: 'a' - opening add form".to_string());
                Action::NavigateTo(View::Add)
            }
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::NavigateTo(view) => {
                if self.state.view != view {
                    self.logger.log(format!("Navigation: {:?} -> {:?}", self.state.view, view));
                    self.list.search_bar.on_blur();
                    self.state.view = view;
                }
                Action::None
            }
            Action::ShowLogs(show) => {
                self.state.show_logs = show;
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("Icons: Switched to {:?} theme", self.icons.theme()));
                self.apply_icons();
                Action::None
            }
            Action::LoadCategories => {
                self.logger.log("Categories: Requesting category directory".to_string());
                self.task_manager.spawn_category_load(Arc::clone(&self.backend));
                Action::None
            }
            Action::FetchQuestions { seq, query } => {
                self.logger
                    .log(format!("Questions: Fetch #{} for {}", seq, query.describe()));
                self.task_manager
                    .spawn_question_fetch(Arc::clone(&self.backend), seq, query);
                Action::None
            }
            Action::DeleteQuestion(id) => {
                self.logger.log(format!("Questions: Deleting question {}", id));
                self.task_manager.spawn_question_delete(Arc::clone(&self.backend), id);
                Action::None
            }
            Action::SubmitQuestion(draft) => {
                self.logger.log(format!(
                    "Form: Submitting question '{}' (difficulty {}, category {})",
                    draft.question, draft.difficulty, draft.category
                ));
                self.task_manager.spawn_question_submit(Arc::clone(&self.backend), draft);
                Action::None
            }
            Action::None => Action::None,
            other => {
                log::debug!("Unhandled action reached the app: {:?}", other);
                Action::None
            }
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.logger.log(format!("Background: Received {}", describe_result(&action)));
            actions.push(action);
        }

        // Clean up finished tasks
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            log::debug!("Background: Cleaned up {} finished tasks", completed_tasks.len());
        }

        actions
    }

    /// Wait for the next background result and apply it. Only returns `false`
    /// when the result channel has closed.
    pub async fn apply_next_background_action(&mut self) -> bool {
        match self.background_action_rx.recv().await {
            Some(action) => {
                self.logger.log(format!("Background: Received {}", describe_result(&action)));
                self.dispatch(action);
                self.task_manager.cleanup_finished_tasks();
                true
            }
            None => false,
        }
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Process an event through the component hierarchy. Returns whether the
    /// screen needs a redraw.
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<bool> {
        let needs_render = match event_type {
            EventType::Key(key) => {
                let action = self.handle_key_events(key);
                self.dispatch(action);
                true
            }
            EventType::Resize(_, _) => true,
            EventType::Tick => {
                let background_actions = self.process_background_actions();
                // Results changed the screen; pending requests keep the loading
                // indicators fresh
                let needs_render = !background_actions.is_empty() || self.is_busy();
                for action in background_actions {
                    self.dispatch(action);
                }
                needs_render
            }
            EventType::Other => false,
        };

        Ok(needs_render)
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Alerts are modal
        if self.alert.is_visible() {
            return self.alert.handle_key_events(key);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        if self.state.show_logs {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('G') => Action::ShowLogs(false),
                _ => Action::None,
            };
        }

        let nav_action = NavHeader::handle_key(key);
        if !nav_action.is_none() {
            return nav_action;
        }

        match self.state.view {
            View::List => {
                if self.list.is_search_focused() {
                    return self.list.handle_key_events(key);
                }

                // Try the panel first (J/K), then the list (j/k and card keys)
                let panel_action = self.panel.handle_key_events(key);
                if !panel_action.is_none() {
                    return panel_action;
                }

                let list_action = self.list.handle_key_events(key);
                if !list_action.is_none() {
                    return list_action;
                }

                self.handle_global_key(key)
            }
            View::Add => self.form.handle_key_events(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.directory.update(action);
        let action = self.panel.update(action);
        let action = self.list.update(action);
        let action = self.form.update(action);
        self.alert.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        NavHeader::render(f, chunks[0], self.state.view, &self.icons);

        match self.state.view {
            View::List => {
                let body = LayoutManager::body_layout(chunks[1], self.panel_width);
                self.panel.render(f, body[0]);
                self.list.render(f, body[1]);
            }
            View::Add => self.form.render(f, chunks[1]),
        }

        let info = StatusInfo {
            view: self.state.view,
            pending_requests: self.task_manager.task_count(),
            fetch_state: self.list.state(),
            form_status: self.form.status(),
            search_focused: self.list.is_search_focused(),
        };
        StatusBar::render(f, chunks[2], &info, &self.icons);

        if self.state.show_logs {
            LogsDialog::render(f, &self.logger.get_logs(), rect);
        }

        // Alerts go on top of everything
        if self.alert.is_visible() {
            let area = LayoutManager::centered_rect_lines(60, 7, rect);
            self.alert.render(f, area);
        }
    }
}

/// Log line for a background result, without dumping whole question pages
fn describe_result(action: &Action) -> String {
    match action {
        Action::CategoriesLoaded(categories) => format!("{} categories", categories.len()),
        Action::QuestionsLoaded { seq, page } => format!(
            "page #{} with {} of {} questions",
            seq,
            page.questions.len(),
            page.total_questions
        ),
        other => format!("{:?}", other),
    }
}
