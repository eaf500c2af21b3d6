// src/handlers/user.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{error::AppError, state::Db};

/// Lists all users.
/// Pure pass-through; whatever the data layer returns goes out verbatim.
pub async fn read_user(State(db): State<Db>) -> Result<impl IntoResponse, AppError> {
    let users = db.read_user().await?;

    Ok(Json(users))
}
