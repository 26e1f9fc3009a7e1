//! HTTP/JSON backend talking to the trivia REST API.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{BackendError, TriviaBackend};
use crate::config::{ApiConfig, SearchMode};
use crate::constants::FIRST_PAGE;
use crate::trivia::{
    CategoriesResponse, Category, Draft, QuestionId, QuestionPage, QuestionQuery, SearchRequest,
};

/// REST backend. Endpoint paths are appended to the configured base URL.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    search_mode: SearchMode,
}

impl HttpBackend {
    /// Build a client from the `[api]` configuration section.
    pub fn new(config: &ApiConfig) -> Result<Self, BackendError> {
        Url::parse(&config.base_url)
            .map_err(|e| BackendError::InvalidData(format!("base url '{}': {}", config.base_url, e)))?;

        let mut builder = Client::builder().cookie_store(config.with_credentials);
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build().map_err(|e| BackendError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            search_mode: config.search_mode,
        })
    }

    pub fn search_mode(&self) -> SearchMode {
        self.search_mode
    }

    /// Absolute URL for an endpoint path such as `questions/7`
    pub fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| BackendError::InvalidData(format!("endpoint '{}': {}", raw, e)))
    }

    async fn read_page(response: Response) -> Result<QuestionPage, BackendError> {
        read_json(response, "questions").await
    }
}

#[async_trait]
impl TriviaBackend for HttpBackend {
    fn backend_type(&self) -> &str {
        "http"
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, BackendError> {
        let response = self
            .client
            .get(self.endpoint("categories")?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: CategoriesResponse = read_json(response, "categories").await?;
        body.categories.into_categories().map_err(BackendError::InvalidData)
    }

    async fn fetch_questions(&self, query: &QuestionQuery) -> Result<QuestionPage, BackendError> {
        let request = match query {
            QuestionQuery::Search { term, page } => match self.search_mode {
                SearchMode::Query => {
                    let mut params = vec![("query", term.clone())];
                    if *page > FIRST_PAGE {
                        params.push(("page", page.to_string()));
                    }
                    self.client.get(self.endpoint("questions")?).query(&params)
                }
                SearchMode::Route => self.client.post(self.endpoint("questions/search")?).json(&SearchRequest {
                    search_term: term,
                    page: *page,
                }),
            },
            QuestionQuery::Category(id) => self.client.get(self.endpoint(&format!("categories/{}/questions", id))?),
        };

        let response = request.send().await.map_err(map_reqwest_error)?;
        Self::read_page(response).await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), BackendError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("questions/{}", id))?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response).map(|_| ())
    }

    async fn create_question(&self, draft: &Draft) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.endpoint("questions")?)
            .json(draft)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response).map(|_| ())
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, BackendError> {
    let text = check_status(response)?.text().await.map_err(map_reqwest_error)?;
    serde_json::from_str(&text).map_err(|e| BackendError::InvalidData(format!("{} payload: {}", what, e)))
}

fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BackendError::Status(status.as_u16()))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> BackendError {
    if let Some(status) = error.status() {
        BackendError::Status(status.as_u16())
    } else if error.is_decode() {
        BackendError::InvalidData(error.to_string())
    } else {
        BackendError::Network(error.to_string())
    }
}
