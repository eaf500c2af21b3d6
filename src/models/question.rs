// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text content of the question.
    pub question: String,

    /// Ordinal index of the question within the quiz.
    /// Clients fetch questions one at a time by this value.
    pub position: i32,
}
