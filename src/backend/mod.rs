//! Backend abstraction layer for the trivia catalog API.
//!
//! This module defines the interface every catalog backend implements, along
//! with the common error type. The UI only ever talks to a `TriviaBackend`.

use async_trait::async_trait;

use crate::trivia::{Category, Draft, QuestionId, QuestionPage, QuestionQuery};

pub mod factory;
pub mod http;

pub use factory::create_backend;
pub use http::HttpBackend;

/// Common error types for backend operations.
///
/// The UI does not distinguish between kinds; every variant is reported to
/// the user as a failed request.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Backend error: {0}")]
    Other(String),
}

/// Backend trait that every trivia catalog backend must implement.
#[async_trait]
pub trait TriviaBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "http").
    fn backend_type(&self) -> &str;

    /// Fetch every category, ordered by id.
    async fn fetch_categories(&self) -> Result<Vec<Category>, BackendError>;

    /// Fetch the questions matching `query`.
    async fn fetch_questions(&self, query: &QuestionQuery) -> Result<QuestionPage, BackendError>;

    async fn delete_question(&self, id: QuestionId) -> Result<(), BackendError>;

    /// Store a new question built from the form draft.
    async fn create_question(&self, draft: &Draft) -> Result<(), BackendError>;
}
