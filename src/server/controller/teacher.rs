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
        teacher::{BulkCreateTeachersDto, TeacherDto, TeacherInputDto},
    },
    server::{
        error::AppError,
        model::teacher::{
            CreateTeacherParam, CreateTeachersParam, TeacherSearchParam, UpdateTeacherParam,
        },
        service::teacher::TeacherService,
        state::AppState,
    },
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teacher";

#[derive(Deserialize)]
pub struct TeacherSearchQuery {
    pub q: Option<String>,
    pub subject: Option<String>,
}

/// Create a teacher.
///
/// # Returns
/// - `201 Created` - The stored teacher
/// - `400 Bad Request` - Missing required field or malformed email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/teachers",
    tag = TEACHER_TAG,
    request_body = TeacherInputDto,
    responses(
        (status = 201, description = "Successfully created teacher", body = TeacherDto),
        (status = 400, description = "Invalid teacher data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    payload: Result<Json<TeacherInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateTeacherParam::from_dto(payload)?;

    let teacher = TeacherService::new(&state.db).create(param).await?;

    state.metrics.record_teachers_created(1);

    Ok((StatusCode::CREATED, Json(teacher.into_dto())))
}

/// Create several teachers at once.
///
/// Every entry is validated before anything is stored; all rows are then inserted
/// together.
///
/// # Returns
/// - `201 Created` - Confirmation with the number of teachers created
/// - `400 Bad Request` - Empty list or an invalid entry (its index is reported)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/teachers/bulk",
    tag = TEACHER_TAG,
    request_body = Vec<TeacherInputDto>,
    responses(
        (status = 201, description = "Successfully created teachers", body = BulkCreateTeachersDto),
        (status = 400, description = "Empty list or invalid teacher data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_teachers(
    State(state): State<AppState>,
    payload: Result<Json<Vec<TeacherInputDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateTeachersParam::from_dto(payload)?;

    let count = TeacherService::new(&state.db).create_many(param).await?;

    state.metrics.record_teachers_created(count);

    Ok((
        StatusCode::CREATED,
        Json(BulkCreateTeachersDto {
            message: "Teachers created successfully".to_string(),
            count,
        }),
    ))
}

/// Search teachers.
///
/// Without filters every teacher is returned, ordered by id.
///
/// # Returns
/// - `200 OK` - Matching teachers, possibly none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/teachers",
    tag = TEACHER_TAG,
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive term matched against name, email and subject"),
        ("subject" = Option<String>, Query, description = "Exact subject, case-insensitive")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teachers", body = Vec<TeacherDto>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teachers(
    State(state): State<AppState>,
    query: Result<Query<TeacherSearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let param = TeacherSearchParam::new(query.q, query.subject);

    let teachers = TeacherService::new(&state.db).search(param).await?;

    let teachers: Vec<TeacherDto> = teachers.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(teachers)))
}

/// Get a teacher by id.
///
/// # Returns
/// - `200 OK` - The teacher
/// - `404 Not Found` - No teacher with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teacher", body = TeacherDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let teacher = TeacherService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

/// Update a teacher.
///
/// Overwrites first name, last name, email, subject and phone.
///
/// # Returns
/// - `200 OK` - The updated teacher
/// - `400 Bad Request` - Invalid teacher data
/// - `404 Not Found` - No teacher with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/teachers/{id}",
    tag = TEACHER_TAG,
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    request_body = TeacherInputDto,
    responses(
        (status = 200, description = "Successfully updated teacher", body = TeacherDto),
        (status = 400, description = "Invalid teacher data", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<TeacherInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let param = UpdateTeacherParam::from_dto(id, payload)?;

    let teacher = TeacherService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}
