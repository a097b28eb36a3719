//! Attendance business logic.
//!
//! Implements the daily check-in/check-out transition and the attendance queries.
//! A teacher has at most one record per server-local day: the first check-in creates
//! it, a single check-out completes it, and every other request for that day is
//! rejected with an `AttendanceError`.

use chrono::{DateTime, Local, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attendance::{AttendanceRepository, AttendanceRow},
        teacher::TeacherRepository,
    },
    error::{attendance::AttendanceError, AppError},
    model::attendance::{
        Attendance, AttendanceStatus, AttendanceWithTeacher, MarkAttendanceParam,
        MonthlyReportParam, UpdateAttendanceParam,
    },
    util::db::is_unique_violation,
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a teacher in or out using the server's local clock.
    pub async fn mark(&self, param: MarkAttendanceParam) -> Result<Attendance, AppError> {
        self.mark_at(param, Local::now()).await
    }

    /// Checks a teacher in or out as of `now`.
    ///
    /// The record for the day of `now` is looked up and the transition applied:
    /// - no record, `checkIn`: a record is created with `check_in = now`
    /// - no record, `checkOut`: rejected, a check-in is required first
    /// - record, `checkIn`: rejected, already checked in for today
    /// - record, `checkOut`: `check_out = now` unless the record lacks a check-in or
    ///   has already been checked out
    ///
    /// Losing a race against a concurrent request for the same teacher yields the
    /// same rejection as arriving second.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The created or updated record
    /// - `Err(AppError::NotFound)` - The teacher does not exist
    /// - `Err(AppError::AttendanceErr)` - The transition is not allowed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn mark_at(
        &self,
        param: MarkAttendanceParam,
        now: DateTime<Local>,
    ) -> Result<Attendance, AppError> {
        let teacher_id = param.teacher_id;

        if !TeacherRepository::new(self.db).exists(teacher_id).await? {
            return Err(AppError::teacher_not_found(teacher_id));
        }

        let repo = AttendanceRepository::new(self.db);
        let today = now.date_naive();
        let at = now.with_timezone(&Utc);

        let existing = repo.find_by_teacher_and_date(teacher_id, today).await?;

        let record = match (param.status, existing) {
            (AttendanceStatus::CheckIn, None) => repo
                .create_check_in(teacher_id, today, at)
                .await
                .map_err(|err| {
                    if is_unique_violation(&err) {
                        AppError::from(AttendanceError::AlreadyCheckedIn {
                            teacher_id,
                            date: today,
                        })
                    } else {
                        AppError::from(err)
                    }
                })?,
            (AttendanceStatus::CheckIn, Some(_)) => {
                return Err(AttendanceError::AlreadyCheckedIn {
                    teacher_id,
                    date: today,
                }
                .into())
            }
            (AttendanceStatus::CheckOut, None) => {
                return Err(AttendanceError::CheckInRequired { teacher_id }.into())
            }
            (AttendanceStatus::CheckOut, Some(record)) => {
                if record.check_in.is_none() {
                    return Err(AttendanceError::NotCheckedIn {
                        attendance_id: record.id,
                    }
                    .into());
                }
                if record.check_out.is_some() {
                    return Err(AttendanceError::AlreadyCheckedOut {
                        attendance_id: record.id,
                    }
                    .into());
                }

                repo.check_out(record.id, at)
                    .await?
                    .ok_or(AttendanceError::AlreadyCheckedOut {
                        attendance_id: record.id,
                    })?
            }
        };

        tracing::info!(
            teacher_id,
            attendance_id = record.id,
            status = %param.status,
            "Marked attendance"
        );

        Ok(Attendance::from_entity(record)?)
    }

    /// Every record with its teacher, ordered by date then id
    pub async fn get_all(&self) -> Result<Vec<AttendanceWithTeacher>, AppError> {
        let repo = AttendanceRepository::new(self.db);

        into_domain(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AttendanceWithTeacher, AppError> {
        let repo = AttendanceRepository::new(self.db);

        let row = repo
            .get_by_id_with_teacher(id)
            .await?
            .ok_or_else(|| AppError::attendance_not_found(id))?;

        Ok(AttendanceWithTeacher::from_entity(row)?)
    }

    /// Applies a partial update to a record.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The updated record
    /// - `Err(AppError::NotFound)` - The record, or the teacher it is moved to, does not exist
    /// - `Err(AppError::AttendanceErr)` - The result would have a check-out without a
    ///   check-in, a status that disagrees with the check-out time, or would collide
    ///   with the teacher's record for another day
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpdateAttendanceParam) -> Result<Attendance, AppError> {
        let repo = AttendanceRepository::new(self.db);

        let existing = repo
            .get_by_id(param.id)
            .await?
            .ok_or_else(|| AppError::attendance_not_found(param.id))?;

        if let Some(teacher_id) = param.teacher_id {
            if !TeacherRepository::new(self.db).exists(teacher_id).await? {
                return Err(AppError::teacher_not_found(teacher_id));
            }
        }

        let check_in = param.check_in.or(existing.check_in);
        let check_out = param.check_out.or(existing.check_out);
        if check_out.is_some() && check_in.is_none() {
            return Err(AttendanceError::CheckOutWithoutCheckIn {
                attendance_id: existing.id,
            }
            .into());
        }

        let status = match param.status {
            Some(status) => status,
            None => Attendance::from_entity(existing.clone())?.status,
        };
        let status_matches = match status {
            AttendanceStatus::CheckIn => check_out.is_none(),
            AttendanceStatus::CheckOut => check_out.is_some(),
        };
        if !status_matches {
            return Err(AttendanceError::StatusMismatch {
                attendance_id: existing.id,
                status: status.as_str(),
            }
            .into());
        }

        let teacher_id = param.teacher_id.unwrap_or(existing.teacher_id);
        let date = param.date.unwrap_or(existing.date);

        let updated = repo.update(existing, param).await.map_err(|err| {
            if is_unique_violation(&err) {
                AppError::from(AttendanceError::DuplicateDay { teacher_id, date })
            } else {
                AppError::from(err)
            }
        })?;

        Ok(Attendance::from_entity(updated)?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = AttendanceRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::attendance_not_found(id));
        }

        tracing::info!(attendance_id = id, "Deleted attendance");

        Ok(())
    }

    /// Records of one teacher within a calendar month
    pub async fn monthly_report(
        &self,
        param: MonthlyReportParam,
    ) -> Result<Vec<AttendanceWithTeacher>, AppError> {
        let repo = AttendanceRepository::new(self.db);

        into_domain(
            repo.get_by_teacher_in_period(param.teacher_id, param.period)
                .await?,
        )
    }

    /// Records of every teacher on one day
    pub async fn daily_report(&self, date: NaiveDate) -> Result<Vec<AttendanceWithTeacher>, AppError> {
        let repo = AttendanceRepository::new(self.db);

        into_domain(repo.get_by_date(date).await?)
    }

    /// Number of teachers checked in on a day
    pub async fn count_checked_in_on(&self, date: NaiveDate) -> Result<u64, AppError> {
        let repo = AttendanceRepository::new(self.db);

        Ok(repo.count_checked_in_on(date).await?)
    }
}

fn into_domain(rows: Vec<AttendanceRow>) -> Result<Vec<AttendanceWithTeacher>, AppError> {
    rows.into_iter()
        .map(|row| AttendanceWithTeacher::from_entity(row).map_err(AppError::from))
        .collect()
}
