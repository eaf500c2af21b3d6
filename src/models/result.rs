// src/models/result.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's quiz outcome, keyed by user id.
/// Read-only here; how the score is produced is the data layer's
/// concern.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizResult {
    pub user_id: i64,
    pub score: i64,
}
