//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    #[default]
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Question card icons
#[derive(Debug, Clone)]
pub struct QuestionIcons {
    pub answer_hidden: &'static str,
    pub answer_shown: &'static str,
    pub difficulty: &'static str,
    pub delete: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub questions_title: &'static str,
    pub categories_title: &'static str,
    pub search: &'static str,
    pub add: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub loading: &'static str,
}

/// Icons for the well-known trivia categories
#[derive(Debug, Clone)]
pub struct CategoryIcons {
    pub science: &'static str,
    pub art: &'static str,
    pub geography: &'static str,
    pub history: &'static str,
    pub entertainment: &'static str,
    pub sports: &'static str,
    pub unknown: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub question: QuestionIcons,
    pub ui: UiIcons,
    pub category: CategoryIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Emoji -> Unicode -> Ascii -> Emoji
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Emoji => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Ascii,
            IconTheme::Ascii => IconTheme::Emoji,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            question: QuestionIcons {
                answer_hidden: "🙈",
                answer_shown: "💡",
                difficulty: "⭐",
                delete: "🗑️",
            },
            ui: UiIcons {
                questions_title: "❓",
                categories_title: "📚",
                search: "🔍",
                add: "➕",
                error: "❌",
                success: "✅",
                loading: "🔄",
            },
            category: CategoryIcons {
                science: "🔬",
                art: "🎨",
                geography: "🌍",
                history: "📜",
                entertainment: "🎬",
                sports: "⚽",
                unknown: "❔",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            question: QuestionIcons {
                answer_hidden: "◌",
                answer_shown: "●",
                difficulty: "★",
                delete: "✗",
            },
            ui: UiIcons {
                questions_title: "▶",
                categories_title: "◆",
                search: "⌕",
                add: "✚",
                error: "✗",
                success: "✓",
                loading: "⟳",
            },
            category: CategoryIcons {
                science: "⚗",
                art: "✎",
                geography: "⊕",
                history: "⌛",
                entertainment: "♫",
                sports: "⚑",
                unknown: "?",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            question: QuestionIcons {
                answer_hidden: "[?]",
                answer_shown: "[!]",
                difficulty: "*",
                delete: "x",
            },
            ui: UiIcons {
                questions_title: ">",
                categories_title: "#",
                search: "/",
                add: "+",
                error: "X",
                success: "+",
                loading: "...",
            },
            category: CategoryIcons {
                science: "[S]",
                art: "[A]",
                geography: "[G]",
                history: "[H]",
                entertainment: "[E]",
                sports: "[P]",
                unknown: "[-]",
            },
        }
    }

    /// Icon for a category by its display name, `None` when the category is unknown.
    #[must_use]
    pub fn category(&self, name: Option<&str>) -> &'static str {
        let icons = self.icons().category;
        match name.map(str::to_ascii_lowercase).as_deref() {
            Some("science") => icons.science,
            Some("art") => icons.art,
            Some("geography") => icons.geography,
            Some("history") => icons.history,
            Some("entertainment") => icons.entertainment,
            Some("sports") => icons.sports,
            _ => icons.unknown,
        }
    }

    #[must_use]
    pub fn answer_toggle(&self, revealed: bool) -> &'static str {
        let icons = self.icons().question;
        if revealed {
            icons.answer_shown
        } else {
            icons.answer_hidden
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> &'static str {
        self.icons().question.difficulty
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().question.delete
    }

    #[must_use]
    pub fn questions_title(&self) -> &'static str {
        self.icons().ui.questions_title
    }

    #[must_use]
    pub fn categories_title(&self) -> &'static str {
        self.icons().ui.categories_title
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().ui.search
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().ui.add
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn loading(&self) -> &'static str {
        self.icons().ui.loading
    }
}
