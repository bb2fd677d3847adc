//! Data access for questions and categories
//!
//! Handlers talk to a [`TriviaStore`] injected through the application
//! state, never to a process-wide database handle.

mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Category, NewQuestion, Question};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i32 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Every category, ordered by id
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    async fn category(&self, id: i32) -> StoreResult<Option<Category>>;

    /// Every question, ordered by id
    async fn questions(&self) -> StoreResult<Vec<Question>>;

    async fn question(&self, id: i32) -> StoreResult<Option<Question>>;

    /// Questions whose category equals `category`, ordered by id
    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text, easiest first
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Candidates for the next quiz question, easiest first.
    /// `None` draws from every category.
    async fn quiz_pool(&self, category: Option<i32>) -> StoreResult<Vec<Question>>;

    async fn insert_question(&self, question: &NewQuestion) -> StoreResult<Question>;

    /// Fails with [`StoreError::NotFound`] when no row had that id
    async fn delete_question(&self, id: i32) -> StoreResult<()>;

    /// Cheap round-trip used by the health endpoint
    async fn ping(&self) -> StoreResult<()>;
}
