use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::server::state::AppState;

/// Records `http_requests_total` and `http_request_duration_seconds` for a request.
///
/// The `path` label is the matched route template so that requests for different
/// ids share one series; the raw URI path is used only when no route matched.
pub async fn track_metrics(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_string(),
        None => req.uri().path().to_string(),
    };

    let response = next.run(req).await;

    state.metrics.record_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed(),
    );

    response
}
