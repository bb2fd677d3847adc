//! Success bodies returned by the trivia endpoints
//!
//! Every body carries `success: true`; errors use
//! [`ErrorResponse`](crate::error::ErrorResponse) instead.

use serde::Serialize;

use crate::domain::{CategoryMap, Question};

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// GET /questions
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// DELETE /questions/:id
#[derive(Debug, Serialize)]
pub struct RemainingQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Search results and questions-by-category.
/// `current_category` is always present, `null` for searches.
#[derive(Debug, Serialize)]
pub struct ScopedQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
