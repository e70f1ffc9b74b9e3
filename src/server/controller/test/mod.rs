use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{router::router, service::token::TokenService, state::AppState};
use test_utils::{builder::TestBuilder, factory};


/// Builds the full application router over a fresh in-memory database.
async fn app() -> (Router, DatabaseConnection) {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();
    let state = AppState::new(db.clone(), TokenService::new(b"test-secret"));

    (router(state), db)
}

/// Sends a request and returns the status with the body parsed as JSON.
///
/// Non-JSON bodies come back as a JSON string; empty bodies as null.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}
