use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::categories::{get_all_categories, get_category},
        queries::questions::get_questions_by_category,
        Category, Question,
    },
    pagination::{paginate, QUESTIONS_PER_PAGE},
    server::{app::AppState, error::ApiError, extract::ApiQuery},
};

use super::{page_number, ApiResponse, PageQuery};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: Vec<Category>,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Category,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesResponse> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

async fn questions_by_category(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<CategoryQuestionsResponse> {
    let page = page_number(&query)?;
    let questions = get_questions_by_category(&pool, id).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let current_category = get_category(&pool, id).await?;

    let total_questions = questions.len();
    let current_questions = paginate(&questions, page, QUESTIONS_PER_PAGE).to_vec();

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: current_questions,
        total_questions,
        current_category,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
        .with_state(state)
}
