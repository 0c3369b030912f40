mod categories;
mod questions;
mod quizzes;

use axum::Json;
use serde::Deserialize;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use super::error::ApiError;

pub type ApiResponse<T> = Result<Json<T>, ApiError>;

#[derive(Deserialize)]
pub(crate) struct PageQuery {
    page: Option<i64>,
}

// Pages are 1-based; absent means the first page. Non-positive values would
// underflow the page window, so they are rejected here rather than clamped.
pub(crate) fn page_number(query: &PageQuery) -> Result<usize, ApiError> {
    match query.page {
        None => Ok(1),
        Some(page) if page >= 1 => Ok(page as usize),
        Some(_) => Err(ApiError::BadRequest),
    }
}
