// src/routes.rs

use axum::{
    Json, Router,
    http::{Method, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{answer, question, result, user},
    state::Db,
};

/// Assembles the main application router.
///
/// * One route per facade operation, plus the root health route.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (the data access handle).
pub fn create_router(db: Db) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        .route("/user", get(user::read_user))
        .route("/question/{position}", get(question::read_question))
        .route("/alternatives/{question_id}", get(question::read_alternatives))
        .route("/answer", post(answer::create_answer))
        .route("/result/{user_id}", get(result::read_result))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db)
}

/// Fixed greeting payload; serves as a health check and never touches
/// the data layer.
async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Fast API in Python!" }))
}
