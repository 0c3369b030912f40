use axum::response::{IntoResponse, Response};
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::categories::get_all_categories,
        queries::questions::{
            create_question, delete_question, get_all_questions, get_question, search_questions,
        },
        Category, Question,
    },
    pagination::{paginate, QUESTIONS_PER_PAGE},
    server::{
        app::AppState,
        error::ApiError,
        extract::{ApiJson, ApiQuery},
    },
};

use super::{page_number, ApiResponse, PageQuery};

// One body for both faces of POST /questions; the presence of searchTerm
// decides which one the client meant.
#[derive(Deserialize)]
struct QuestionsBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<i64>,
    category: Option<i64>,
}

#[derive(Serialize)]
struct QuestionListResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<Category>,
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<QuestionListResponse> {
    let page = page_number(&query)?;
    let questions = get_all_questions(&pool).await?;
    let current_questions = paginate(&questions, page, QUESTIONS_PER_PAGE).to_vec();
    if current_questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions: current_questions,
        categories,
    }))
}

async fn create_or_search(
    State(pool): State<SqlitePool>,
    ApiQuery(query): ApiQuery<PageQuery>,
    ApiJson(body): ApiJson<QuestionsBody>,
) -> Result<Response, ApiError> {
    // Empty searchTerm counts as "no search requested", matching the
    // original client's truthiness dispatch.
    if let Some(term) = body.search_term.as_deref().filter(|t| !t.is_empty()) {
        let page = page_number(&query)?;
        let matches = search_questions(&pool, term).await?;
        if matches.is_empty() {
            return Err(ApiError::NotFound);
        }
        let current_questions = paginate(&matches, page, QUESTIONS_PER_PAGE).to_vec();
        return Ok(Json(SearchResponse {
            success: true,
            total_questions: matches.len(),
            questions: current_questions,
        })
        .into_response());
    }

    let question = body.question.as_deref().filter(|q| !q.is_empty());
    let answer = body.answer.as_deref().filter(|a| !a.is_empty());
    let (Some(question), Some(answer)) = (question, answer) else {
        return Err(ApiError::BadRequest);
    };

    create_question(&pool, question, answer, body.difficulty, body.category)
        .await
        .map_err(|error| {
            tracing::warn!("Question insert failed: {error}");
            ApiError::Unprocessable
        })?;

    Ok(Json(CreatedResponse { success: true }).into_response())
}

async fn delete_a_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<CreatedResponse> {
    if get_question(&pool, id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    delete_question(&pool, id).await.map_err(|error| {
        tracing::warn!("Question delete failed: {error}");
        ApiError::Unprocessable
    })?;
    Ok(Json(CreatedResponse { success: true }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", delete(delete_a_question))
        .with_state(state)
}
