// tests/lambda_tests.rs

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use lambda_runtime::{Context, LambdaEvent};
use quiz_api::db::DataAccess;
use quiz_api::error::AppError;
use quiz_api::lambda::{self, InvocationEvent};
use quiz_api::models::{
    alternative::Alternative,
    answer::{Answer, NewAnswer},
    question::Question,
    result::QuizResult,
    user::User,
};
use quiz_api::routes;
use quiz_api::state::Db;

/// Minimal in-memory data layer for adapter tests.
struct StubDataAccess {
    question: Question,
}

#[async_trait]
impl DataAccess for StubDataAccess {
    async fn read_user(&self) -> Result<Vec<User>, AppError> {
        Ok(Vec::new())
    }

    async fn read_questions(&self, position: i32) -> Result<Option<Question>, AppError> {
        if position == self.question.position {
            Ok(Some(self.question.clone()))
        } else {
            Ok(None)
        }
    }

    async fn read_alternatives(&self, _question_id: i64) -> Result<Vec<Alternative>, AppError> {
        Ok(Vec::new())
    }

    async fn create_answer(&self, answer: NewAnswer) -> Result<Answer, AppError> {
        Ok(Answer {
            id: 1,
            user_id: answer.user_id,
            question_id: answer.question_id,
            alternative_id: answer.alternative_id,
            created_at: Some(chrono::Utc::now()),
        })
    }

    async fn read_result(&self, _user_id: i64) -> Result<Option<QuizResult>, AppError> {
        Ok(None)
    }
}

fn test_router() -> Router {
    let db: Db = Arc::new(StubDataAccess {
        question: Question {
            id: 10,
            question: "What is the capital of France?".to_string(),
            position: 1,
        },
    });
    routes::create_router(db)
}

fn event(method: &str, path: &str, body: Option<&str>) -> LambdaEvent<InvocationEvent> {
    let mut headers = HashMap::new();
    if body.is_some() {
        headers.insert("content-type".to_string(), "application/json".to_string());
    }

    LambdaEvent::new(
        InvocationEvent {
            http_method: method.to_string(),
            path: path.to_string(),
            headers,
            body: body.map(str::to_string),
        },
        Context::default(),
    )
}

#[tokio::test]
async fn adapter_serves_root_greeting() {
    // Act
    let response = lambda::handle(event("GET", "/", None), test_router())
        .await
        .expect("Adapter failed");

    // Assert: envelope carries the status and a JSON string body
    assert_eq!(response.status_code, 200);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Fast API in Python!" }));
}

#[tokio::test]
async fn adapter_preserves_router_status_codes() {
    // Act: position 99 does not exist
    let response = lambda::handle(event("GET", "/question/99", None), test_router())
        .await
        .expect("Adapter failed");

    // Assert
    assert_eq!(response.status_code, 400);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["detail"], "Error");
}

#[tokio::test]
async fn adapter_forwards_post_bodies() {
    // Act
    let payload = r#"{"user_id": 1, "question_id": 10, "alternative_id": 100}"#;
    let response = lambda::handle(event("POST", "/answer", Some(payload)), test_router())
        .await
        .expect("Adapter failed");

    // Assert
    assert_eq!(response.status_code, 201);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["alternative_id"], 100);
}

#[tokio::test]
async fn adapter_reports_json_content_type() {
    // Act
    let response = lambda::handle(event("GET", "/", None), test_router())
        .await
        .expect("Adapter failed");

    // Assert
    assert_eq!(
        response.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
}
