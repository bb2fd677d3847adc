//! Page-number pagination over fully fetched result sets

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::convert::Infallible;

/// Fixed page size for every question listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// `?page=N` query parameter (1-indexed)
///
/// Never rejects: a repeated `page` keeps its first value, and a query
/// string that does not decode is treated as having no `page` at all.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let page = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Query(pairs)| {
                pairs
                    .into_iter()
                    .find(|(key, _)| key == "page")
                    .map(|(_, value)| value)
            });

        Ok(Self { page })
    }
}

impl PageQuery {
    /// Requested page, or 1 when absent or not an integer
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Return the items on 1-indexed `page`. Pages below 1 or past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
