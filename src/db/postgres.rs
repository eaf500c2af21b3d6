// src/db/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    db::DataAccess,
    error::AppError,
    models::{
        alternative::Alternative,
        answer::{Answer, NewAnswer},
        question::Question,
        result::QuizResult,
        user::User,
    },
};

/// Postgres-backed implementation of [`DataAccess`].
///
/// Thin wrapper over a connection pool; every method is a single
/// bound query. Pooling and transactional discipline live in sqlx,
/// not here.
#[derive(Clone)]
pub struct PgDataAccess {
    pool: PgPool,
}

impl PgDataAccess {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataAccess for PgDataAccess {
    async fn read_user(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn read_questions(&self, position: i32) -> Result<Option<Question>, AppError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, "position"
            FROM questions
            WHERE "position" = $1
            "#,
        )
        .bind(position)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn read_alternatives(&self, question_id: i64) -> Result<Vec<Alternative>, AppError> {
        let alternatives = sqlx::query_as::<_, Alternative>(
            r#"
            SELECT id, question_id, alternative, correct
            FROM alternatives
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(alternatives)
    }

    async fn create_answer(&self, answer: NewAnswer) -> Result<Answer, AppError> {
        let created = sqlx::query_as::<_, Answer>(
            r#"
            INSERT INTO answers (user_id, question_id, alternative_id)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, question_id, alternative_id, created_at
            "#,
        )
        .bind(answer.user_id)
        .bind(answer.question_id)
        .bind(answer.alternative_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert answer: {:?}", e);
            AppError::from(e)
        })?;

        Ok(created)
    }

    async fn read_result(&self, user_id: i64) -> Result<Option<QuizResult>, AppError> {
        // Score is derived at read time: one point per answer whose
        // chosen alternative is flagged correct.
        let result = sqlx::query_as::<_, QuizResult>(
            r#"
            SELECT
                answers.user_id,
                COUNT(*) FILTER (WHERE alternatives.correct) AS score
            FROM answers
            JOIN alternatives ON alternatives.id = answers.alternative_id
            WHERE answers.user_id = $1
            GROUP BY answers.user_id
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }
}
