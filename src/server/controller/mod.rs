//! HTTP request handlers.
//!
//! Controllers extract and validate request input, convert DTOs into domain parameters,
//! call the service layer, update metrics, and convert results back into DTOs. Every
//! handler returns `Result<impl IntoResponse, AppError>` so failures share one JSON
//! error body.

pub mod attendance;
pub mod metrics;
pub mod teacher;

#[cfg(test)]
mod test;
