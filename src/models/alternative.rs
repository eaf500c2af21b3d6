// src/models/alternative.rs

use serde::Serialize;
use sqlx::FromRow;

/// Represents the 'alternatives' table in the database.
/// Each alternative belongs to exactly one question.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Alternative {
    pub id: i64,
    pub question_id: i64,

    /// The text shown to the user for this option.
    pub alternative: String,

    /// Whether this is the correct option.
    /// Skipped during serialization so clients can't read the answer key.
    #[serde(skip_serializing)]
    pub correct: bool,
}
