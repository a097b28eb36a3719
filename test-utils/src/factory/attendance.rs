//! Attendance factory for creating test attendance entities.
//!
//! Defaults to a record for today that has been checked in but not checked out,
//! the state left behind by a successful check-in.

use chrono::{DateTime, Local, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test attendance records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::attendance::AttendanceFactory;
///
/// let record = AttendanceFactory::new(&db, teacher.id)
///     .date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
///     .checked_out()
///     .build()
///     .await?;
/// ```
pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    teacher_id: i32,
    date: NaiveDate,
    status: String,
    check_in: Option<DateTime<Utc>>,
    check_out: Option<DateTime<Utc>>,
}

impl<'a> AttendanceFactory<'a> {
    /// Creates a new AttendanceFactory with default values.
    ///
    /// Defaults:
    /// - date: today in the server's local timezone
    /// - status: `"checkIn"`
    /// - check_in: now
    /// - check_out: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `teacher_id` - ID of an existing teacher the record belongs to
    pub fn new(db: &'a DatabaseConnection, teacher_id: i32) -> Self {
        Self {
            db,
            teacher_id,
            date: Local::now().date_naive(),
            status: "checkIn".to_string(),
            check_in: Some(Utc::now()),
            check_out: None,
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn check_in(mut self, check_in: Option<DateTime<Utc>>) -> Self {
        self.check_in = check_in;
        self
    }

    pub fn check_out(mut self, check_out: Option<DateTime<Utc>>) -> Self {
        self.check_out = check_out;
        self
    }

    /// Marks the record as checked out now with the matching status label.
    pub fn checked_out(mut self) -> Self {
        self.status = "checkOut".to_string();
        self.check_out = Some(Utc::now());
        self
    }

    /// Builds and inserts the attendance entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::attendance::Model)` - Created attendance entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::attendance::Model, DbErr> {
        let now = Utc::now();
        entity::attendance::ActiveModel {
            teacher_id: ActiveValue::Set(self.teacher_id),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(self.status),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a checked-in attendance record for today.
///
/// Shorthand for `AttendanceFactory::new(db, teacher_id).build().await`.
pub async fn create_attendance(
    db: &DatabaseConnection,
    teacher_id: i32,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db, teacher_id).build().await
}
