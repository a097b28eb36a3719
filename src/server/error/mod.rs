//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod attendance;
pub mod config;
pub mod internal;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        attendance::AttendanceError, config::ConfigError, internal::InternalError,
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `ValidationError`
/// and `AttendanceError` handle their own response mapping, while infrastructure
/// failures collapse into a generic 500 response.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Malformed or missing request input.
    ///
    /// Delegates to `ValidationError::into_response()`, always 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Illegal attendance transition.
    ///
    /// Delegates to `AttendanceError::into_response()`, always 400 Bad Request.
    #[error(transparent)]
    AttendanceErr(#[from] AttendanceError),

    /// Unexpected state found in stored data.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure binding or serving the listening socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Requested record does not exist.
    ///
    /// Results in 404 Not Found.
    ///
    /// # Fields
    /// - `resource` - Human readable resource name, e.g. "Teacher"
    /// - `id` - Identifier that was looked up
    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: i32 },
}

impl AppError {
    pub fn teacher_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "Teacher",
            id,
        }
    }

    pub fn attendance_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "Attendance",
            id,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `ValidationErr` and `AttendanceErr`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types (DbErr, InternalErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::AttendanceErr(err) => err.into_response(),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id, "Requested record not found");
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{} not found", resource),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
