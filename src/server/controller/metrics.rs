use axum::{extract::State, http::header, response::IntoResponse};

use crate::server::{
    error::AppError,
    metrics::PROMETHEUS_CONTENT_TYPE,
    model::attendance::local_today,
    service::attendance::AttendanceService,
    state::AppState,
};

/// Prometheus scrape endpoint.
///
/// The checked-in-today gauge is computed from the database on every scrape.
pub async fn get_metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let checked_in = AttendanceService::new(&state.db)
        .count_checked_in_on(local_today())
        .await?;

    Ok((
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        state.metrics.render(checked_in),
    ))
}
