use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::teacher::TeacherDto;

/// Check-in or check-out request for a teacher.
///
/// `status` stays a free string here so an unknown value is answered with the API's
/// own validation error rather than a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkAttendanceDto {
    #[schema(example = 1)]
    pub teacher_id: i32,
    #[schema(example = "checkIn")]
    pub status: String,
}

/// Full attendance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceDto {
    pub id: i32,
    pub teacher_id: i32,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "checkIn")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub check_out: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present when the record is fetched together with its teacher
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub teacher: Option<TeacherDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MarkAttendanceResponseDto {
    #[schema(example = "You have checked in successfully")]
    pub message: String,
    pub attendance: AttendanceDto,
}

/// Partial update of an attendance record; omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAttendanceDto {
    pub teacher_id: Option<i32>,
    #[schema(example = "2026-01-05", format = "date", value_type = Option<String>)]
    pub date: Option<NaiveDate>,
    #[schema(example = "checkOut")]
    pub status: Option<String>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
}

/// Display projection of an attendance record with the teacher's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummaryDto {
    #[schema(example = 1)]
    pub teacher_id: i32,
    #[schema(example = "Ada Lovelace")]
    pub teacher_name: String,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    /// Day formatted as `DD-MM-YYYY`
    #[schema(example = "05-01-2026")]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReportDto {
    pub attendance_list: Vec<AttendanceSummaryDto>,
}
