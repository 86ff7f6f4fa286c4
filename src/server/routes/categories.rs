use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions::get_questions_for_category},
        Question,
    },
    server::{app::AppState, error::ApiResponse},
};

#[derive(Serialize)]
struct CategoriesList {
    success: bool,
    categories: Vec<String>,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesList> {
    let categories = categories::get_all_categories(&pool).await?;
    Ok(Json(CategoriesList {
        success: true,
        categories: categories.into_iter().map(|c| c.name).collect(),
    }))
}

// takes a storage id, not a list position; results are not paginated
async fn questions_for_category(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<CategoryQuestions> {
    let Path(id) = id?;
    let category = categories::get_category(&pool, id).await?;
    let questions = get_questions_for_category(&pool, id).await?;
    Ok(Json(CategoryQuestions {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.name,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
