// src/handlers/result.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, state::Db};

/// Retrieves the quiz result for a user.
///
/// No not-found check: a user with no result gets a 200 with a null
/// body, mirroring the data layer verbatim.
pub async fn read_result(
    State(db): State<Db>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = db.read_result(user_id).await?;

    Ok(Json(result))
}
