//! Trivia catalog data types shared by the backend client and the UI.
//!
//! The wire shapes accepted here are deliberately tolerant: ids may arrive as
//! JSON numbers or numeric strings, and the category listing may be either an
//! `id -> name` object or a list of `{id, type}` records.

use crate::constants::{DEFAULT_CATEGORY, DEFAULT_DIFFICULTY, FIRST_PAGE, MAX_DIFFICULTY, MIN_DIFFICULTY};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::Display;

pub type CategoryId = u32;
pub type QuestionId = u32;

/// A question category as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A stored trivia question. Never edited in place by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(deserialize_with = "deserialize_numeric")]
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_numeric")]
    pub category: CategoryId,
    #[serde(deserialize_with = "deserialize_difficulty")]
    pub difficulty: u8,
}

/// One page of questions returned by a list, search or category fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// What a question fetch asks the backend for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionQuery {
    /// Free-text search; an empty term means "no filter". Results are paged
    /// by the server, `page` starts at 1.
    Search { term: String, page: u32 },
    /// Every question of one category, unpaged.
    Category(CategoryId),
}

impl Default for QuestionQuery {
    fn default() -> Self {
        Self::search("")
    }
}

impl QuestionQuery {
    /// First page of a search for `term`
    pub fn search(term: impl Into<String>) -> Self {
        Self::Search {
            term: term.into(),
            page: FIRST_PAGE,
        }
    }

    /// Page number for paged queries
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::Search { page, .. } => Some(*page),
            Self::Category(_) => None,
        }
    }

    /// Same search on another page. Category queries are not paged.
    pub fn with_page(&self, page: u32) -> Option<Self> {
        match self {
            Self::Search { term, .. } => Some(Self::Search {
                term: term.clone(),
                page: page.max(FIRST_PAGE),
            }),
            Self::Category(_) => None,
        }
    }

    /// What is being listed, without the page
    pub fn subject(&self) -> String {
        match self {
            Self::Search { term, .. } if term.is_empty() => "all questions".to_string(),
            Self::Search { term, .. } => format!("search '{}'", term),
            Self::Category(id) => format!("category {}", id),
        }
    }

    /// Short label for titles and log lines
    pub fn describe(&self) -> String {
        match self.page() {
            Some(page) if page > FIRST_PAGE => format!("{}, page {}", self.subject(), page),
            _ => self.subject(),
        }
    }
}

/// Number of pages needed to show `total` questions, never less than one.
pub fn page_count(total: usize, page_size: usize) -> u32 {
    let pages = total.div_ceil(page_size.max(1)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The in-progress question held by the add form.
///
/// `difficulty` and `category` serialize as their selected option values
/// (decimal strings), matching what a form select submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub question: String,
    pub answer: String,
    #[serde(serialize_with = "serialize_option_value")]
    pub difficulty: u8,
    #[serde(serialize_with = "serialize_option_value")]
    pub category: CategoryId,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            difficulty: DEFAULT_DIFFICULTY,
            category: DEFAULT_CATEGORY,
        }
    }
}

impl Draft {
    /// Both free-text fields are required; whitespace counts as content.
    pub fn is_submittable(&self) -> bool {
        !self.question.is_empty() && !self.answer.is_empty()
    }

    /// Clamp into the valid difficulty range
    pub fn set_difficulty(&mut self, difficulty: u8) {
        self.difficulty = difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
    }
}

/// Body of `GET /categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub categories: CategoryListing,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryListing {
    Map(BTreeMap<String, String>),
    List(Vec<CategoryRecord>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
    #[serde(deserialize_with = "deserialize_numeric")]
    pub id: CategoryId,
    #[serde(rename = "type", alias = "name")]
    pub name: String,
}

impl CategoryListing {
    /// Flatten either listing shape into categories ordered by id.
    pub fn into_categories(self) -> Result<Vec<Category>, String> {
        let mut categories = match self {
            Self::Map(entries) => entries
                .into_iter()
                .map(|(id, name)| {
                    id.trim()
                        .parse::<CategoryId>()
                        .map(|id| Category { id, name })
                        .map_err(|e| format!("invalid category id '{}': {}", id, e))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Self::List(records) => records
                .into_iter()
                .map(|record| Category {
                    id: record.id,
                    name: record.name,
                })
                .collect(),
        };
        categories.sort_by_key(|category| category.id);
        Ok(categories)
    }
}

/// Body of the search-route variant, `POST /questions/search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    #[serde(rename = "searchTerm")]
    pub search_term: &'a str,
    /// Omitted for the first page
    #[serde(skip_serializing_if = "is_first_page")]
    pub page: u32,
}

fn is_first_page(page: &u32) -> bool {
    *page <= FIRST_PAGE
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

fn deserialize_numeric<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => u32::try_from(n).map_err(de::Error::custom),
        NumberOrText::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

fn deserialize_difficulty<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = deserialize_numeric(deserializer)?;
    u8::try_from(raw)
        .ok()
        .filter(|d| (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(d))
        .ok_or_else(|| de::Error::custom(format!("difficulty {} outside 1..=5", raw)))
}

fn serialize_option_value<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    serializer.collect_str(value)
}
