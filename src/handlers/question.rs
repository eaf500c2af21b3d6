// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, state::Db};

/// Retrieves the question at a given ordinal position.
///
/// This is the only read route with an explicit not-found check:
/// a missing question is a 400 with a generic detail message.
pub async fn read_question(
    State(db): State<Db>,
    Path(position): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let question = db
        .read_questions(position)
        .await?
        .ok_or(AppError::BadRequest("Error".to_string()))?;

    Ok(Json(question))
}

/// Lists the alternatives for a question.
///
/// No not-found check: an unknown question id returns an empty list
/// with status 200, mirroring the data layer verbatim.
pub async fn read_alternatives(
    State(db): State<Db>,
    Path(question_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let alternatives = db.read_alternatives(question_id).await?;

    Ok(Json(alternatives))
}
