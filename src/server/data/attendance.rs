//! Attendance data repository for database operations.
//!
//! Provides the `AttendanceRepository` for the attendance state transitions and
//! report queries. Rows that are converted into domain models later are returned
//! as raw entity models, joined with their teacher where the caller needs the name.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::attendance::{AttendanceStatus, MonthPeriod, UpdateAttendanceParam};

/// An attendance row joined with its teacher row.
pub type AttendanceRow = (entity::attendance::Model, Option<entity::teacher::Model>);

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the record for a teacher on a given day.
    pub async fn find_by_teacher_and_date(
        &self,
        teacher_id: i32,
        date: NaiveDate,
    ) -> Result<Option<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::TeacherId.eq(teacher_id))
            .filter(entity::attendance::Column::Date.eq(date))
            .one(self.db)
            .await
    }

    /// Inserts a checked-in record for the given day.
    ///
    /// # Returns
    /// - `Ok(Model)` - The new record
    /// - `Err(DbErr)` - Database error; a unique violation means the teacher already has
    ///   a record for that day
    pub async fn create_check_in(
        &self,
        teacher_id: i32,
        date: NaiveDate,
        at: DateTime<Utc>,
    ) -> Result<entity::attendance::Model, DbErr> {
        entity::attendance::ActiveModel {
            teacher_id: ActiveValue::Set(teacher_id),
            date: ActiveValue::Set(date),
            status: ActiveValue::Set(AttendanceStatus::CheckIn.as_str().to_string()),
            check_in: ActiveValue::Set(Some(at)),
            check_out: ActiveValue::Set(None),
            created_at: ActiveValue::Set(at),
            updated_at: ActiveValue::Set(at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Records a check-out on a record that has not been checked out yet.
    ///
    /// The update only applies while `check_out` is still NULL, so of two concurrent
    /// check-outs exactly one succeeds.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated record
    /// - `Ok(None)` - The record was already checked out (or no longer exists)
    /// - `Err(DbErr)` - Database error during update or reload
    pub async fn check_out(
        &self,
        id: i32,
        at: DateTime<Utc>,
    ) -> Result<Option<entity::attendance::Model>, DbErr> {
        let result = entity::prelude::Attendance::update_many()
            .col_expr(entity::attendance::Column::CheckOut, Expr::value(at))
            .col_expr(
                entity::attendance::Column::Status,
                Expr::value(AttendanceStatus::CheckOut.as_str()),
            )
            .col_expr(entity::attendance::Column::UpdatedAt, Expr::value(at))
            .filter(entity::attendance::Column::Id.eq(id))
            .filter(entity::attendance::Column::CheckOut.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::Attendance::find_by_id(id).one(self.db).await
    }

    /// All records with their teachers, ordered by date then id.
    pub async fn get_all(&self) -> Result<Vec<AttendanceRow>, DbErr> {
        entity::prelude::Attendance::find()
            .find_also_related(entity::prelude::Teacher)
            .order_by_asc(entity::attendance::Column::Date)
            .order_by_asc(entity::attendance::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_id_with_teacher(&self, id: i32) -> Result<Option<AttendanceRow>, DbErr> {
        entity::prelude::Attendance::find_by_id(id)
            .find_also_related(entity::prelude::Teacher)
            .one(self.db)
            .await
    }

    /// Applies the present fields of a partial update to an existing record.
    ///
    /// # Arguments
    /// - `existing` - Current state of the record
    /// - `param` - Fields to overwrite; `None` keeps the current value
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated record
    /// - `Err(DbErr)` - Database error; a unique violation means the new
    ///   `(teacher_id, date)` pair is already taken
    pub async fn update(
        &self,
        existing: entity::attendance::Model,
        param: UpdateAttendanceParam,
    ) -> Result<entity::attendance::Model, DbErr> {
        let mut active = existing.into_active_model();

        if let Some(teacher_id) = param.teacher_id {
            active.teacher_id = ActiveValue::Set(teacher_id);
        }
        if let Some(date) = param.date {
            active.date = ActiveValue::Set(date);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(check_in) = param.check_in {
            active.check_in = ActiveValue::Set(Some(check_in));
        }
        if let Some(check_out) = param.check_out {
            active.check_out = ActiveValue::Set(Some(check_out));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Deletes a record by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The record existed and was deleted
    /// - `Ok(false)` - No record with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Attendance::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records of one teacher within a month, ordered by date.
    pub async fn get_by_teacher_in_period(
        &self,
        teacher_id: i32,
        period: MonthPeriod,
    ) -> Result<Vec<AttendanceRow>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::TeacherId.eq(teacher_id))
            .filter(entity::attendance::Column::Date.gte(period.start))
            .filter(entity::attendance::Column::Date.lt(period.end))
            .find_also_related(entity::prelude::Teacher)
            .order_by_asc(entity::attendance::Column::Date)
            .all(self.db)
            .await
    }

    /// Records of every teacher on one day, ordered by id.
    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRow>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::Date.eq(date))
            .find_also_related(entity::prelude::Teacher)
            .order_by_asc(entity::attendance::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of records on a day that carry a check-in timestamp.
    pub async fn count_checked_in_on(&self, date: NaiveDate) -> Result<u64, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::Date.eq(date))
            .filter(entity::attendance::Column::CheckIn.is_not_null())
            .count(self.db)
            .await
    }
}
