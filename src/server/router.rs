use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        attendance::{
            AttendanceDto, AttendanceReportDto, AttendanceSummaryDto, MarkAttendanceDto,
            MarkAttendanceResponseDto, UpdateAttendanceDto,
        },
        teacher::{BulkCreateTeachersDto, TeacherDto, TeacherInputDto},
    },
    server::{
        controller::{
            attendance::{
                delete_attendance, get_attendance_by_id, get_attendances, get_daily_report,
                get_monthly_report, mark_attendance, update_attendance,
            },
            metrics::get_metrics,
            teacher::{
                create_teacher, create_teachers, get_teacher_by_id, get_teachers, update_teacher,
            },
        },
        middleware::metrics::track_metrics,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "School Teacher Management API",
        version = "1.0.0",
        description = "Teacher records and daily attendance check-in/check-out."
    ),
    paths(
        crate::server::controller::teacher::create_teacher,
        crate::server::controller::teacher::create_teachers,
        crate::server::controller::teacher::get_teachers,
        crate::server::controller::teacher::get_teacher_by_id,
        crate::server::controller::teacher::update_teacher,
        crate::server::controller::attendance::mark_attendance,
        crate::server::controller::attendance::get_attendances,
        crate::server::controller::attendance::get_attendance_by_id,
        crate::server::controller::attendance::update_attendance,
        crate::server::controller::attendance::delete_attendance,
        crate::server::controller::attendance::get_monthly_report,
        crate::server::controller::attendance::get_daily_report,
    ),
    components(schemas(
        ErrorDto,
        TeacherDto,
        TeacherInputDto,
        BulkCreateTeachersDto,
        MarkAttendanceDto,
        MarkAttendanceResponseDto,
        AttendanceDto,
        UpdateAttendanceDto,
        AttendanceSummaryDto,
        AttendanceReportDto,
    )),
    tags(
        (name = "teacher", description = "Teacher management"),
        (name = "attendance", description = "Attendance check-in/check-out and reports")
    )
)]
pub struct ApiDoc;

/// Builds the application router with all routes, documentation and middleware.
///
/// # Arguments
/// - `state` - Shared application state; also handed to the metrics middleware
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/teachers", get(get_teachers).post(create_teacher))
        .route("/teachers/bulk", post(create_teachers))
        .route("/teachers/{id}", get(get_teacher_by_id).put(update_teacher))
        .route("/attendance", get(get_attendances).post(mark_attendance))
        .route(
            "/attendance/{id}",
            get(get_attendance_by_id)
                .put(update_attendance)
                .delete(delete_attendance),
        )
        .route("/attendanceByDate", get(get_monthly_report))
        .route("/attendanceByFilterDate", get(get_daily_report));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .nest("/api/v1", api)
        .route("/metrics", get(get_metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), track_metrics))
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
