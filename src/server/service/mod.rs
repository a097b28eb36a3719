//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: The attendance check-in/check-out transition rules
//! - **Orchestration**: Coordinating repository calls, e.g. verifying a teacher exists before marking
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Turning missing rows and unique-key collisions into typed `AppError`s

pub mod attendance;
pub mod teacher;

#[cfg(test)]
mod test;
