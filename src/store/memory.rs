//! In-memory store backing the route tests

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashSet;

use super::{StoreError, StoreResult, TriviaStore};
use crate::domain::{Category, NewQuestion, Question};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i32,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    // Operations that should fail as if the database were unreachable
    failing: RwLock<HashSet<&'static str>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, id: i32, kind: &str) -> Self {
        {
            let mut tables = self.tables.write();
            tables.categories.push(Category {
                id,
                kind: kind.to_string(),
            });
            tables.categories.sort_by_key(|c| c.id);
        }
        self
    }

    pub fn with_question(
        self,
        question: &str,
        answer: &str,
        category: i32,
        difficulty: i32,
    ) -> Self {
        {
            let mut tables = self.tables.write();
            tables.next_id += 1;
            let id = tables.next_id;
            tables.questions.push(Question {
                id,
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty,
            });
        }
        self
    }

    pub fn fail(&self, operation: &'static str) {
        self.failing.write().insert(operation);
    }

    pub fn question_count(&self) -> usize {
        self.tables.read().questions.len()
    }

    fn check(&self, operation: &'static str) -> StoreResult<()> {
        if self.failing.read().contains(operation) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn select<F>(&self, filter: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        self.tables
            .read()
            .questions
            .iter()
            .filter(|q| filter(q))
            .cloned()
            .collect()
    }
}

fn by_difficulty(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by_key(|q| (q.difficulty, q.id));
    questions
}

#[async_trait]
impl TriviaStore for InMemoryStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        self.check("categories")?;
        Ok(self.tables.read().categories.clone())
    }

    async fn category(&self, id: i32) -> StoreResult<Option<Category>> {
        self.check("category")?;
        Ok(self
            .tables
            .read()
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        self.check("questions")?;
        Ok(self.select(|_| true))
    }

    async fn question(&self, id: i32) -> StoreResult<Option<Question>> {
        self.check("question")?;
        Ok(self.select(|q| q.id == id).into_iter().next())
    }

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        self.check("questions_in_category")?;
        Ok(self.select(|q| q.category == category))
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        self.check("search_questions")?;
        let needle = term.to_lowercase();
        Ok(by_difficulty(
            self.select(|q| q.question.to_lowercase().contains(&needle)),
        ))
    }

    async fn quiz_pool(&self, category: Option<i32>) -> StoreResult<Vec<Question>> {
        self.check("quiz_pool")?;
        Ok(by_difficulty(
            self.select(|q| category.map_or(true, |c| q.category == c)),
        ))
    }

    async fn insert_question(&self, question: &NewQuestion) -> StoreResult<Question> {
        self.check("insert_question")?;
        let mut tables = self.tables.write();
        tables.next_id += 1;
        let row = Question {
            id: tables.next_id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        };
        tables.questions.push(row.clone());
        Ok(row)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<()> {
        self.check("delete_question")?;
        let mut tables = self.tables.write();
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        if tables.questions.len() == before {
            return Err(StoreError::NotFound {
                resource: "question",
                id,
            });
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check("ping")
    }
}
