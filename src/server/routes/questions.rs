use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{find_category, get_all_categories},
            questions::{self, NewQuestion},
        },
        Question,
    },
    server::{
        app::AppState,
        deserializers::deserialize_lenient_page,
        error::{ApiResponse, AppError},
    },
    telemetry::MUTATION_CNTR,
    trivia::{paginate, ClientCategoryId, Page},
};

// the listing always reports this storage category as the current one
const DEFAULT_CATEGORY_ID: i64 = 1;

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_lenient_page")]
    page: Page,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Deserialize)]
struct AddQuestionBody {
    question: String,
    answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    difficulty: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    category: i64,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    id: i64,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<QuestionsPage> {
    // a query string we can't decode at all is still just page 1
    let page = match query {
        Ok(Query(PageQuery { page })) => page,
        Err(rejection) => {
            tracing::debug!("Ignoring query string: {}", rejection.body_text());
            Page::default()
        }
    };
    let all = questions::get_all_questions(&pool).await?;
    let categories = get_all_categories(&pool).await?;

    let current_category = categories
        .iter()
        .find(|c| c.id == DEFAULT_CATEGORY_ID)
        .map(|c| c.name.clone());

    Ok(Json(QuestionsPage {
        success: true,
        questions: paginate(&all, page).to_vec(),
        total_questions: all.len(),
        categories: categories.into_iter().map(|c| (c.id, c.name)).collect(),
        current_category,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResponse<SearchResults> {
    let Json(SearchBody { search_term }) = body?;
    let found = questions::search_questions(&pool, &search_term).await?;
    tracing::debug!(term = %search_term, hits = found.len(), "Searched questions");
    Ok(Json(SearchResults {
        success: true,
        total_questions: found.len(),
        questions: found,
        current_category: None,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Deleted> {
    let Path(id) = id?;
    questions::delete_question(&pool, id).await?;
    MUTATION_CNTR.with_label_values(&["delete"]).inc();
    tracing::info!(id, "Deleted question");
    Ok(Json(Deleted {
        success: true,
        deleted: id,
    }))
}

async fn add_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<AddQuestionBody>, JsonRejection>,
) -> ApiResponse<Created> {
    let Json(body) = body?;
    let question = body.question.trim();
    let answer = body.answer.trim();
    if question.is_empty() || answer.is_empty() {
        return Err(AppError::Unprocessable(
            "question and answer must not be empty".to_owned(),
        ));
    }

    let category = ClientCategoryId(body.category).storage_id();
    if find_category(&pool, category).await?.is_none() {
        return Err(AppError::Unprocessable(format!(
            "unknown category {}",
            body.category
        )));
    }

    let id = questions::create_question(
        &pool,
        NewQuestion {
            question,
            answer,
            category,
            difficulty: body.difficulty,
        },
    )
    .await?;
    MUTATION_CNTR.with_label_values(&["create"]).inc();
    tracing::info!(id, category, "Created question");

    Ok(Json(Created { success: true, id }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .route("/add_question", post(add_question))
        .route("/addquestion", post(add_question))
        .with_state(state)
}
