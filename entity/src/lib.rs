//! SeaORM entity definitions for the school attendance service.
//!
//! One module per table. Use [`prelude`] for the entity types themselves.

pub mod prelude;

pub mod attendance;
pub mod teacher;
