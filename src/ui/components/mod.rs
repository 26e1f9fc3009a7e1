//! Reusable UI components

pub mod common;
pub mod logs_dialog;
pub mod status_bar;

// Component architecture
pub mod alert_dialog;
pub mod category_directory;
pub mod category_panel;
pub mod nav_header;
pub mod question_card;
pub mod question_form;
pub mod question_list;
pub mod search_bar;

// Component exports
pub use alert_dialog::AlertDialog;
pub use category_directory::CategoryDirectory;
pub use category_panel::CategoryPanel;
pub use nav_header::NavHeader;
pub use question_card::QuestionCard;
pub use question_form::QuestionForm;
pub use question_list::QuestionListView;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
