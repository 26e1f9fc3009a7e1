//! Constants used throughout the application
//!
//! This module centralizes user-facing text, draft defaults and layout
//! limits so components agree on them.

// Alerts shown when a backend request fails
pub const ALERT_LOAD_CATEGORIES: &str = "Unable to load categories. Please try your request again";
pub const ALERT_LOAD_QUESTIONS: &str = "Unable to load questions. Please try your request again";
pub const ALERT_DELETE_QUESTION: &str = "Unable to delete question. Please try your request again";
pub const ALERT_ADD_QUESTION: &str = "Unable to add question. Please try your request again";

// Form notices
pub const NOTICE_QUESTION_ADDED: &str = "Trivia Question Successfully Added";

// Titles
pub const TITLE_APP: &str = "Trivialist";
pub const TITLE_ADD_FORM: &str = "Add a New Trivia Question";
pub const TITLE_ALERT: &str = "Alert";
pub const TITLE_LOGS: &str = "Logs - Press 'Esc' or 'G' to close";
pub const SEARCH_PLACEHOLDER: &str = "Search questions...";

/// Display name for a category id missing from the directory
pub const UNKNOWN_CATEGORY: &str = "unknown";

// Draft defaults
pub const DEFAULT_DIFFICULTY: u8 = 1;
pub const DEFAULT_CATEGORY: u32 = 1;
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const API_URL_ENV: &str = "TRIVIALIST_API_URL";
/// Upper bound for a configured request timeout, in seconds
pub const MAX_TIMEOUT_SECS: u64 = 300;
/// Questions per page served by `GET /questions`
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;
pub const FIRST_PAGE: u32 = 1;

// UI Layout Constants
/// Minimum category panel width in columns
pub const CATEGORY_PANEL_MIN_WIDTH: u16 = 12;
/// Maximum category panel width in columns
pub const CATEGORY_PANEL_MAX_WIDTH: u16 = 40;
/// Default category panel width in columns
pub const CATEGORY_PANEL_DEFAULT_WIDTH: u16 = 24;

/// In-memory log entries kept for the log viewer
pub const MAX_LOG_ENTRIES: usize = 1000;

pub const CONFIG_GENERATED: &str = "Generated default configuration file";
