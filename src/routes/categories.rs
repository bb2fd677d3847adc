//! Category routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::response::{CategoriesResponse, ScopedQuestionsResponse};
use crate::api::{paginate, PageQuery, PathParam};
use crate::app::AppState;
use crate::domain::category_map;
use crate::error::{ApiError, ApiResult};

/// GET /categories
///
/// All categories as an id → type map. An empty table is a 404.
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CategoriesResponse>> {
    let categories = state.store.categories().await?;

    if categories.is_empty() {
        return Err(ApiError::not_found("no categories defined"));
    }

    tracing::debug!(count = categories.len(), "Listing categories");

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/:category_id/questions
///
/// Questions in one category, paginated, tagged with the category's type.
pub async fn list_questions_in_category(
    State(state): State<Arc<AppState>>,
    PathParam(category_id): PathParam<i32>,
    query: PageQuery,
) -> ApiResult<Json<ScopedQuestionsResponse>> {
    let category = state
        .store
        .category(category_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("category {category_id}")))?;

    let questions = state
        .store
        .questions_in_category(category.id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let total_questions = questions.len();
    tracing::info!(
        category_id = category.id,
        total_questions,
        page = query.page(),
        "Listing questions in category"
    );

    Ok(Json(ScopedQuestionsResponse {
        success: true,
        questions: paginate(questions, query.page()),
        total_questions,
        current_category: Some(category.kind),
    }))
}
