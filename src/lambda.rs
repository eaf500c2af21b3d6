// src/lambda.rs

use std::collections::HashMap;

use axum::{
    Router,
    body::Body,
    http::{Method, Request},
};
use lambda_runtime::LambdaEvent;
use serde::{Deserialize, Serialize};
use tower::ServiceExt;

/// Inbound invocation event from the serverless gateway.
/// Field names follow the hosting platform's JSON contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Response envelope expected by the serverless gateway.
/// `body` is always a JSON string, never a nested object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Entry adapter: translates a gateway event into a router request
/// and the router's response back into a gateway envelope.
///
/// Pure protocol shim; routing, validation and status codes all stay
/// in the router, which keeps it portable across hosting models.
pub async fn handle(
    event: LambdaEvent<InvocationEvent>,
    router: Router,
) -> Result<InvocationResponse, lambda_runtime::Error> {
    let (event, _context) = event.into_parts();

    let method = Method::from_bytes(event.http_method.as_bytes())?;

    let mut request = Request::builder().method(method).uri(&event.path);
    for (name, value) in &event.headers {
        request = request.header(name.as_str(), value.as_str());
    }
    let request = request.body(Body::from(event.body.unwrap_or_default()))?;

    let response = router.oneshot(request).await?;

    let status = response.status().as_u16();
    let mut headers = HashMap::new();
    for (name, value) in response.headers() {
        if let Ok(value) = value.to_str() {
            headers.insert(name.to_string(), value.to_string());
        }
    }

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = String::from_utf8(bytes.to_vec())?;

    Ok(InvocationResponse {
        status_code: status,
        headers,
        body,
    })
}
