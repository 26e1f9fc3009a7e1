use crate::trivia::{Category, CategoryId, Draft, QuestionId, QuestionPage, QuestionQuery};

/// Top-level screens reachable from the navigation header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Add,
}

/// Tag carried by every question fetch so late responses can be recognised
pub type RequestSeq = u64;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NavigateTo(View),

    // Category directory
    LoadCategories,
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed(String),
    SelectCategory(Option<CategoryId>),

    // Question list
    SearchQuestions(String),
    FetchQuestions {
        seq: RequestSeq,
        query: QuestionQuery,
    },
    QuestionsLoaded {
        seq: RequestSeq,
        page: QuestionPage,
    },
    QuestionsFailed {
        seq: RequestSeq,
        error: String,
    },
    DeleteQuestion(QuestionId),
    QuestionDeleted(QuestionId),
    DeleteFailed {
        id: QuestionId,
        error: String,
    },

    // Question form
    SubmitQuestion(Draft),
    QuestionAdded,
    AddFailed(String),

    // UI operations
    ShowAlert(String),
    DismissAlert,
    ShowLogs(bool),
    CycleIconTheme,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
