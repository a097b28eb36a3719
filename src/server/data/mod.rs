//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and hand
//! back domain models, or the raw joined rows where converting them can fail, so the
//! service layer decides how such failures surface.

pub mod attendance;
pub mod teacher;

#[cfg(test)]
mod test;
