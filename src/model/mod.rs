//! Request and response shapes exchanged over the HTTP API.
//!
//! These DTOs define the JSON contract and the OpenAPI schemas. Server-side domain
//! models convert into them at the controller boundary.

pub mod api;
pub mod attendance;
pub mod teacher;
