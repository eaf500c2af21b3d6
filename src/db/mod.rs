// src/db/mod.rs

pub mod postgres;

pub use postgres::PgDataAccess;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        alternative::Alternative,
        answer::{Answer, NewAnswer},
        question::Question,
        result::QuizResult,
        user::User,
    },
};

/// Contract between the HTTP layer and the persistence backend.
///
/// One method per route (minus root); each is a plain lookup or
/// insert with no business rules. Handlers hold this as a trait
/// object so tests can substitute an in-memory implementation.
#[async_trait]
pub trait DataAccess: Send + Sync {
    /// Lists all users.
    async fn read_user(&self) -> Result<Vec<User>, AppError>;

    /// Fetches the question at the given ordinal position, if any.
    async fn read_questions(&self, position: i32) -> Result<Option<Question>, AppError>;

    /// Lists the alternatives belonging to a question.
    /// An unknown question id yields an empty collection, not an error.
    async fn read_alternatives(&self, question_id: i64) -> Result<Vec<Alternative>, AppError>;

    /// Inserts an answer submission and returns the created record.
    async fn create_answer(&self, answer: NewAnswer) -> Result<Answer, AppError>;

    /// Fetches the quiz result for a user, if any.
    async fn read_result(&self, user_id: i64) -> Result<Option<QuizResult>, AppError>;
}
