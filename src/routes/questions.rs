//! Question routes
//!
//! Listing, deletion, and the combined search/create endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::response::{
    QuestionPageResponse, RemainingQuestionsResponse, ScopedQuestionsResponse, SuccessResponse,
};
use crate::api::{paginate, JsonBody, PageQuery, PathParam};
use crate::app::AppState;
use crate::domain::{category_map, Question, QuestionPayload};
use crate::error::{ApiError, ApiResult};
use crate::store::{StoreError, StoreResult, TriviaStore};

/// GET /questions
///
/// One page of questions, the unpaginated total and the category map.
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    query: PageQuery,
) -> ApiResult<Json<QuestionPageResponse>> {
    let page = query.page();
    let questions = state.store.questions().await?;
    let total_questions = questions.len();

    let questions = paginate(questions, page);
    if questions.is_empty() {
        return Err(ApiError::not_found(format!(
            "page {page} is empty ({total_questions} questions)"
        )));
    }

    let categories = state
        .store
        .categories()
        .await
        .map_err(|e| ApiError::unprocessable(e.to_string()))?;

    tracing::debug!(page, total_questions, "Listing questions");

    Ok(Json(QuestionPageResponse {
        success: true,
        questions,
        total_questions,
        categories: category_map(categories),
    }))
}

/// DELETE /questions/:question_id
///
/// Deletes the question and returns the requested page of what remains.
/// Every failure on this route, an unknown id included, is reported as 422.
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    PathParam(question_id): PathParam<i32>,
    query: PageQuery,
) -> ApiResult<Json<RemainingQuestionsResponse>> {
    let remaining = remove_question(state.store.as_ref(), question_id)
        .await
        .map_err(|e| ApiError::unprocessable(e.to_string()))?;

    let total_questions = remaining.len();
    tracing::info!(question_id, total_questions, "Deleted question");

    Ok(Json(RemainingQuestionsResponse {
        success: true,
        questions: paginate(remaining, query.page()),
        total_questions,
    }))
}

async fn remove_question(store: &dyn TriviaStore, id: i32) -> StoreResult<Vec<Question>> {
    if store.question(id).await?.is_none() {
        return Err(StoreError::NotFound {
            resource: "question",
            id,
        });
    }

    store.delete_question(id).await?;
    store.questions().await
}

/// POST /questions
///
/// A body with a non-empty `searchTerm` searches question text; any other
/// body must describe a new question to insert.
pub async fn create_or_search_questions(
    State(state): State<Arc<AppState>>,
    query: PageQuery,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Response> {
    let payload =
        QuestionPayload::from_body(body).map_err(|e| ApiError::unprocessable(e.to_string()))?;

    match payload {
        QuestionPayload::Search { search_term } => {
            let matches = state
                .store
                .search_questions(&search_term)
                .await
                .map_err(|e| ApiError::unprocessable(e.to_string()))?;

            let total_questions = matches.len();
            tracing::info!(search_term = %search_term, total_questions, "Searched questions");

            Ok(Json(ScopedQuestionsResponse {
                success: true,
                questions: paginate(matches, query.page()),
                total_questions,
                current_category: None,
            })
            .into_response())
        }
        QuestionPayload::Create(new_question) => {
            let created = state
                .store
                .insert_question(&new_question)
                .await
                .map_err(|e| ApiError::unprocessable(e.to_string()))?;

            tracing::info!(
                question_id = created.id,
                category = created.category,
                "Created question"
            );

            Ok(Json(SuccessResponse::ok()).into_response())
        }
    }
}
