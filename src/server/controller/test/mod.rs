use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, factory, factory::attendance::AttendanceFactory};
use tower::ServiceExt;

use crate::server::{metrics::Metrics, router::router, state::AppState};


/// Builds the full application router over a fresh in-memory database.
async fn app() -> (Router, DatabaseConnection) {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();

    let app = router(AppState::new(db.clone(), Arc::new(Metrics::new())));

    (app, db)
}

/// Sends a request and returns the status with the body parsed as JSON (`Null` when empty).
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

fn teacher_json(first_name: &str, email: &str, subject: &str) -> Value {
    json!({
        "first_name": first_name,
        "last_name": "Tester",
        "email": email,
        "subject": subject,
        "phone": "555-0100"
    })
}
