use std::collections::HashSet;

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions::get_quiz_candidates, Question},
    server::{
        app::AppState,
        error::{ApiResponse, AppError},
    },
    telemetry::QUIZ_CNTR,
    trivia::{select_next, ClientCategoryId, QuizCategory},
};

// the frontend sends this type when "All" is picked
const ALL_CATEGORIES: &str = "click";

#[derive(Deserialize)]
struct QuizCategoryBody {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    id: Option<i64>,
    #[serde(rename = "type")]
    kind: String,
}

// the id only matters when a single category was picked
impl TryFrom<QuizCategoryBody> for QuizCategory {
    type Error = AppError;

    fn try_from(body: QuizCategoryBody) -> Result<Self, Self::Error> {
        if body.kind == ALL_CATEGORIES {
            return Ok(QuizCategory::All);
        }
        body.id
            .map(|id| QuizCategory::Category(ClientCategoryId(id)))
            .ok_or_else(|| {
                AppError::Unprocessable(format!(
                    "quiz_category.id is required for {}",
                    body.kind
                ))
            })
    }
}

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: QuizCategoryBody,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Option<Question>,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResponse<QuizResponse> {
    let Json(request) = body?;
    let category = QuizCategory::try_from(request.quiz_category)?;
    let previous: HashSet<i64> = request.previous_questions.into_iter().collect();

    let candidates = get_quiz_candidates(&pool, category.storage_filter()).await?;
    let question = select_next(&candidates, &previous, &mut rand::thread_rng()).cloned();

    let label = category
        .storage_filter()
        .map_or_else(|| "all".to_owned(), |id| id.to_string());
    match &question {
        Some(q) => {
            QUIZ_CNTR.with_label_values(&[label.as_str()]).inc();
            tracing::debug!(id = q.id, category = %label, "Serving quiz question");
        }
        None => tracing::debug!(category = %label, seen = previous.len(), "Quiz exhausted"),
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
