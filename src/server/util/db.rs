use sea_orm::{DbErr, SqlErr};

/// Checks whether a database error was caused by a unique constraint or index.
///
/// # Arguments
/// - `err` - Error returned by an insert or update
///
/// # Returns
/// - `true` - The write collided with an existing row on a unique key
/// - `false` - Any other database error
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
