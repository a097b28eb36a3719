use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::AppError};

/// Malformed or missing request input.
///
/// Every variant results in a 400 Bad Request with the error message returned to the
/// client as-is.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is absent or blank.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("invalid email address '{email}'")]
    InvalidEmail { email: String },

    /// Bulk create received no teachers.
    #[error("teacher list cannot be empty")]
    EmptyBatch,

    /// One entry of a bulk create failed validation; nothing was persisted.
    #[error("teacher at index {index}: {source}")]
    InvalidBatchEntry {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },

    /// Attendance status is neither `checkIn` nor `checkOut`.
    #[error("invalid status value '{value}'")]
    InvalidStatus { value: String },

    #[error("month must be 1-12, got {month}")]
    InvalidMonth { month: u32 },

    /// Day, month and year do not form a calendar date.
    #[error("invalid date {day:02}-{month:02}-{year}")]
    InvalidDate { day: u32, month: u32, year: i32 },

    /// An update request carried no fields to change.
    #[error("no fields provided for update")]
    EmptyUpdate,

    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    MalformedQuery(String),

    #[error("{0}")]
    MalformedPath(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedBody(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::MalformedQuery(rejection.body_text()).into()
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::MalformedPath(rejection.body_text()).into()
    }
}
