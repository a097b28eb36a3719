//! Attendance domain models and parameters.
//!
//! Covers the check-in/check-out status, stored attendance records with and without
//! their teacher, and the validated parameters for marking, updating and reporting.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::attendance::{
        AttendanceDto, AttendanceSummaryDto, MarkAttendanceDto, UpdateAttendanceDto,
    },
    server::{
        error::{internal::InternalError, validation::ValidationError},
        model::teacher::Teacher,
    },
};

/// Display format for report dates.
const SUMMARY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Attendance action requested by a teacher, also stored as the record's latest status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    CheckIn,
    CheckOut,
}

impl AttendanceStatus {
    /// Label used on the wire and in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckIn => "checkIn",
            Self::CheckOut => "checkOut",
        }
    }

    /// Confirmation returned to the client after a successful transition.
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::CheckIn => "You have checked in successfully",
            Self::CheckOut => "You have checked out successfully",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "checkIn" => Ok(Self::CheckIn),
            "checkOut" => Ok(Self::CheckOut),
            other => Err(ValidationError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A stored attendance record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub id: i32,
    pub teacher_id: i32,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Attendance {
    /// Converts an entity model to a domain model.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - Successfully converted
    /// - `Err(InternalError::UnknownStoredStatus)` - The stored status label is not recognised
    pub fn from_entity(entity: entity::attendance::Model) -> Result<Self, InternalError> {
        let status = entity.status.parse::<AttendanceStatus>().map_err(|_| {
            InternalError::UnknownStoredStatus {
                id: entity.id,
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            teacher_id: entity.teacher_id,
            date: entity.date,
            status,
            check_in: entity.check_in,
            check_out: entity.check_out,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            teacher_id: self.teacher_id,
            date: self.date,
            status: self.status.as_str().to_string(),
            check_in: self.check_in,
            check_out: self.check_out,
            created_at: self.created_at,
            updated_at: self.updated_at,
            teacher: None,
        }
    }
}

/// An attendance record loaded together with the teacher it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceWithTeacher {
    pub attendance: Attendance,
    pub teacher: Teacher,
}

impl AttendanceWithTeacher {
    /// Converts a joined `find_also_related` row to a domain model.
    ///
    /// # Returns
    /// - `Ok(AttendanceWithTeacher)` - Successfully converted
    /// - `Err(InternalError::MissingTeacher)` - The joined teacher row is absent
    /// - `Err(InternalError::UnknownStoredStatus)` - The stored status label is not recognised
    pub fn from_entity(
        (attendance, teacher): (entity::attendance::Model, Option<entity::teacher::Model>),
    ) -> Result<Self, InternalError> {
        let teacher = teacher.ok_or(InternalError::MissingTeacher {
            attendance_id: attendance.id,
            teacher_id: attendance.teacher_id,
        })?;

        Ok(Self {
            attendance: Attendance::from_entity(attendance)?,
            teacher: Teacher::from_entity(teacher),
        })
    }

    /// Full record with the teacher nested.
    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            teacher: Some(self.teacher.into_dto()),
            ..self.attendance.into_dto()
        }
    }

    /// Report projection: teacher id and name, timestamps, and the day as `DD-MM-YYYY`.
    pub fn into_summary_dto(self) -> AttendanceSummaryDto {
        AttendanceSummaryDto {
            teacher_id: self.teacher.id,
            teacher_name: self.teacher.full_name(),
            check_in: self.attendance.check_in,
            check_out: self.attendance.check_out,
            date: self
                .attendance
                .date
                .format(SUMMARY_DATE_FORMAT)
                .to_string(),
        }
    }
}

/// Parameters for a check-in or check-out request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkAttendanceParam {
    pub teacher_id: i32,
    pub status: AttendanceStatus,
}

impl MarkAttendanceParam {
    pub fn from_dto(dto: MarkAttendanceDto) -> Result<Self, ValidationError> {
        Ok(Self {
            teacher_id: dto.teacher_id,
            status: dto.status.parse()?,
        })
    }
}

/// Partial update of an attendance record. `None` leaves the column untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAttendanceParam {
    pub id: i32,
    pub teacher_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
}

impl UpdateAttendanceParam {
    /// Validates an update request.
    ///
    /// # Returns
    /// - `Ok(UpdateAttendanceParam)` - At least one field present and status recognised
    /// - `Err(ValidationError::EmptyUpdate)` - No field present
    /// - `Err(ValidationError::InvalidStatus)` - Status is neither `checkIn` nor `checkOut`
    pub fn from_dto(id: i32, dto: UpdateAttendanceDto) -> Result<Self, ValidationError> {
        let status = dto.status.as_deref().map(str::parse).transpose()?;

        let param = Self {
            id,
            teacher_id: dto.teacher_id,
            date: dto.date,
            status,
            check_in: dto.check_in,
            check_out: dto.check_out,
        };

        if param.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }

        Ok(param)
    }

    fn is_empty(&self) -> bool {
        self.teacher_id.is_none()
            && self.date.is_none()
            && self.status.is_none()
            && self.check_in.is_none()
            && self.check_out.is_none()
    }
}

/// Half-open date range `[start, end)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthPeriod {
    /// # Returns
    /// - `Ok(MonthPeriod)` - First day of the month through first day of the next
    /// - `Err(ValidationError::InvalidMonth)` - Month outside 1..=12
    /// - `Err(ValidationError::InvalidDate)` - Year outside the supported calendar range
    pub fn new(month: u32, year: i32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth { month });
        }

        let start = calendar_date(1, month, year)?;
        let end = if month == 12 {
            calendar_date(1, 1, year + 1)?
        } else {
            calendar_date(1, month + 1, year)?
        };

        Ok(Self { start, end })
    }
}

/// Parameters for the per-teacher monthly report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyReportParam {
    pub teacher_id: i32,
    pub period: MonthPeriod,
}

impl MonthlyReportParam {
    /// Builds the report parameters, defaulting month and year to those of `today`.
    pub fn new(
        teacher_id: i32,
        month: Option<u32>,
        year: Option<i32>,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let period = MonthPeriod::new(
            month.unwrap_or_else(|| today.month()),
            year.unwrap_or_else(|| today.year()),
        )?;

        Ok(Self { teacher_id, period })
    }
}

/// Resolves the day for the daily report, each missing component taken from `today`.
pub fn report_day(
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    let month = month.unwrap_or_else(|| today.month());
    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidMonth { month });
    }

    calendar_date(
        day.unwrap_or_else(|| today.day()),
        month,
        year.unwrap_or_else(|| today.year()),
    )
}

/// Today in the server's local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn calendar_date(day: u32, month: u32, year: i32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ValidationError::InvalidDate { day, month, year })
}
