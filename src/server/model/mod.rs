//! Domain models and operation parameters.
//!
//! Repositories and services exchange these types instead of raw SeaORM entities or
//! API DTOs. Each model provides `from_entity` for the data boundary and `into_dto`
//! for the controller boundary; parameter types validate DTO input once, so the
//! service layer only ever sees well-formed values.

pub mod attendance;
pub mod teacher;
