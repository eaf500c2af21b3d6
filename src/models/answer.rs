// src/models/answer.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// DTO for an inbound answer submission (`POST /answer`).
///
/// Fields are `Option` so that deserialization accepts a partial body
/// and `validate()` can report every missing field at once instead of
/// failing on the first one.
#[derive(Debug, Deserialize, Validate)]
pub struct UserAnswer {
    #[validate(required(message = "field required"))]
    pub user_id: Option<i64>,
    #[validate(required(message = "field required"))]
    pub question_id: Option<i64>,
    #[validate(required(message = "field required"))]
    pub alternative_id: Option<i64>,
}

impl UserAnswer {
    /// Converts the payload into an insertable record.
    /// Only meaningful after `validate()` has passed.
    pub fn into_record(self) -> NewAnswer {
        NewAnswer {
            user_id: self.user_id.unwrap_or_default(),
            question_id: self.question_id.unwrap_or_default(),
            alternative_id: self.alternative_id.unwrap_or_default(),
        }
    }
}

/// A validated answer submission, ready for insertion.
#[derive(Debug, Clone, Serialize)]
pub struct NewAnswer {
    pub user_id: i64,
    pub question_id: i64,
    pub alternative_id: i64,
}

/// Represents the 'answers' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
    pub alternative_id: i64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}
