// src/handlers/answer.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::{AppError, FieldError},
    models::answer::UserAnswer,
    state::Db,
};

/// Creates an answer submission.
///
/// * Rejects bodies that are not valid JSON for the schema (422).
/// * Rejects bodies missing required fields, naming each one (422).
/// * On success inserts the record and returns it with 201 Created.
pub async fn create_answer(
    State(db): State<Db>,
    payload: Result<Json<UserAnswer>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::Validation(vec![FieldError {
            loc: vec!["body".to_string()],
            msg: rejection.body_text(),
            r#type: "json_invalid".to_string(),
        }])
    })?;

    payload.validate()?;

    let created = db.create_answer(payload.into_record()).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
