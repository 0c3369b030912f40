use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::categories::get_category,
        queries::questions::{get_all_questions, get_questions_by_category},
        Question,
    },
    quiz::next_question,
    server::{
        app::AppState,
        deserializers::{CategoryFilter, CategorySelector},
        error::ApiError,
        extract::ApiJson,
    },
    telemetry::QUIZ_QUESTION_CNTR,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizBody {
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(rename = "type")]
    selector: CategorySelector,
}

// `question` is null once the pool is exhausted; the client treats that as
// the end of the game.
#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<QuizBody>,
) -> ApiResponse<QuizResponse> {
    let filter = body
        .quiz_category
        .selector
        .category_filter()
        .ok_or(ApiError::BadRequest)?;

    let questions = match filter {
        CategoryFilter::All => get_all_questions(&pool).await?,
        CategoryFilter::One(id) => {
            // An unknown category is a client error, never an empty pool.
            get_category(&pool, id).await?;
            get_questions_by_category(&pool, id).await?
        }
    };

    let candidate_ids: Vec<i64> = questions.iter().map(|q| q.id).collect();
    let picked = next_question(
        &candidate_ids,
        &body.previous_questions,
        &mut rand::thread_rng(),
    );
    let question = picked.and_then(|id| questions.into_iter().find(|q| q.id == id));

    if question.is_some() {
        let label = match filter {
            CategoryFilter::All => "all".to_owned(),
            CategoryFilter::One(id) => id.to_string(),
        };
        QUIZ_QUESTION_CNTR.with_label_values(&[&label]).inc();
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
