use axum::{extract::State, Json};
use rand::seq::SliceRandom;
use std::sync::Arc;

use crate::api::response::QuizResponse;
use crate::api::JsonBody;
use crate::app::AppState;
use crate::domain::QuizRequest;
use crate::error::{ApiError, ApiResult};

/// POST /quizzes
///
/// Picks one question uniformly at random from the chosen category
/// (id 0 for all of them). `question` is null when the pool is empty.
pub async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> ApiResult<Json<QuizResponse>> {
    let category = req
        .quiz_category
        .as_ref()
        .ok_or_else(|| ApiError::unprocessable("quiz_category is required"))?;

    let candidates = state
        .store
        .quiz_pool(category.filter())
        .await
        .map_err(|e| ApiError::unprocessable(e.to_string()))?;

    tracing::debug!(
        category_id = category.id,
        category = ?category.kind,
        candidates = candidates.len(),
        previous_questions = req.previous_count(),
        "Drawing quiz question"
    );

    let question = candidates.choose(&mut rand::thread_rng()).cloned();

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
