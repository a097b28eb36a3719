use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        attendance::{
            AttendanceDto, AttendanceReportDto, AttendanceSummaryDto, MarkAttendanceDto,
            MarkAttendanceResponseDto, UpdateAttendanceDto,
        },
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::attendance::{
            local_today, report_day, AttendanceStatus, AttendanceWithTeacher,
            MarkAttendanceParam, MonthlyReportParam, UpdateAttendanceParam,
        },
        service::attendance::AttendanceService,
        state::AppState,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

#[derive(Deserialize)]
pub struct MonthlyReportQuery {
    #[serde(rename = "teacherId")]
    pub teacher_id: Option<i32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

#[derive(Deserialize)]
pub struct DailyReportQuery {
    /// Day of month
    pub date: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

fn into_report(records: Vec<AttendanceWithTeacher>) -> AttendanceReportDto {
    AttendanceReportDto {
        attendance_list: records
            .into_iter()
            .map(AttendanceWithTeacher::into_summary_dto)
            .collect(),
    }
}

/// Check a teacher in or out for today.
///
/// The first `checkIn` of the day creates the record; a later `checkOut` completes it.
///
/// # Returns
/// - `201 Created` - Confirmation message with the resulting record
/// - `400 Bad Request` - Invalid status, or the transition is not allowed today
/// - `404 Not Found` - Teacher does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/attendance",
    tag = ATTENDANCE_TAG,
    request_body = MarkAttendanceDto,
    responses(
        (status = 201, description = "Attendance marked", body = MarkAttendanceResponseDto),
        (status = 400, description = "Invalid status or transition", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_attendance(
    State(state): State<AppState>,
    payload: Result<Json<MarkAttendanceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = MarkAttendanceParam::from_dto(payload)?;

    let attendance = AttendanceService::new(&state.db).mark(param).await?;

    match param.status {
        AttendanceStatus::CheckIn => state.metrics.record_check_in(),
        AttendanceStatus::CheckOut => state.metrics.record_check_out(),
    }

    Ok((
        StatusCode::CREATED,
        Json(MarkAttendanceResponseDto {
            message: param.status.success_message().to_string(),
            attendance: attendance.into_dto(),
        }),
    ))
}

/// List every attendance record.
///
/// # Returns
/// - `200 OK` - All records with teacher names, ordered by date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/attendance",
    tag = ATTENDANCE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = Vec<AttendanceSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendances(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = AttendanceService::new(&state.db).get_all().await?;

    let records: Vec<AttendanceSummaryDto> = records
        .into_iter()
        .map(AttendanceWithTeacher::into_summary_dto)
        .collect();

    Ok((StatusCode::OK, Json(records)))
}

/// Get an attendance record by id, including its teacher.
///
/// # Returns
/// - `200 OK` - The record
/// - `404 Not Found` - No record with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/attendance/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Attendance ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attendance", body = AttendanceDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Attendance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let record = AttendanceService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Update an attendance record.
///
/// Only the fields present in the body are changed.
///
/// # Returns
/// - `200 OK` - The updated record
/// - `400 Bad Request` - Empty update, invalid status, check-out without check-in, or
///   the teacher already has a record for the new date
/// - `404 Not Found` - No record with that id, or the new teacher does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/attendance/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Attendance ID")
    ),
    request_body = UpdateAttendanceDto,
    responses(
        (status = 200, description = "Successfully updated attendance", body = AttendanceDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 404, description = "Attendance or teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateAttendanceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let param = UpdateAttendanceParam::from_dto(id, payload)?;

    let record = AttendanceService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Delete an attendance record.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `404 Not Found` - No record with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/attendance/{id}",
    tag = ATTENDANCE_TAG,
    params(
        ("id" = i32, Path, description = "Attendance ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted attendance"),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Attendance not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_attendance(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    AttendanceService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Monthly attendance report for one teacher.
///
/// Month and year default to the current ones.
///
/// # Returns
/// - `200 OK` - `{ "attendanceList": [...] }` for the month
/// - `400 Bad Request` - Missing `teacherId` or month outside 1-12
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/attendanceByDate",
    tag = ATTENDANCE_TAG,
    params(
        ("teacherId" = i32, Query, description = "Teacher ID"),
        ("month" = Option<u32>, Query, description = "Month (1-12), default current month"),
        ("year" = Option<i32>, Query, description = "Year, default current year")
    ),
    responses(
        (status = 200, description = "Successfully retrieved report", body = AttendanceReportDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monthly_report(
    State(state): State<AppState>,
    query: Result<Query<MonthlyReportQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let teacher_id = query
        .teacher_id
        .ok_or(ValidationError::MissingField { field: "teacherId" })?;
    let param = MonthlyReportParam::new(teacher_id, query.month, query.year, local_today())?;

    let records = AttendanceService::new(&state.db)
        .monthly_report(param)
        .await?;

    Ok((StatusCode::OK, Json(into_report(records))))
}

/// Attendance report for a single day across all teachers.
///
/// Day, month and year each default to today's.
///
/// # Returns
/// - `200 OK` - `{ "attendanceList": [...] }` for the day
/// - `400 Bad Request` - Month outside 1-12 or not a calendar date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/attendanceByFilterDate",
    tag = ATTENDANCE_TAG,
    params(
        ("date" = Option<u32>, Query, description = "Day of month (1-31), default today"),
        ("month" = Option<u32>, Query, description = "Month (1-12), default current month"),
        ("year" = Option<i32>, Query, description = "Year, default current year")
    ),
    responses(
        (status = 200, description = "Successfully retrieved report", body = AttendanceReportDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_daily_report(
    State(state): State<AppState>,
    query: Result<Query<DailyReportQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let day = report_day(query.date, query.month, query.year, local_today())?;

    let records = AttendanceService::new(&state.db).daily_report(day).await?;

    Ok((StatusCode::OK, Json(into_report(records))))
}
