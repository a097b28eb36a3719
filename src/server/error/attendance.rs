use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Illegal attendance transitions.
///
/// Every variant results in a 400 Bad Request with the error message returned to
/// the client as-is.
#[derive(Error, Debug)]
pub enum AttendanceError {
    /// Check-out requested for a teacher with no record today.
    #[error("check-in required before check-out")]
    CheckInRequired { teacher_id: i32 },

    /// Second check-in for the same teacher on the same day.
    #[error("already checked in for today")]
    AlreadyCheckedIn { teacher_id: i32, date: NaiveDate },

    /// Today's record exists but has no check-in timestamp.
    #[error("cannot checkout without check-in")]
    NotCheckedIn { attendance_id: i32 },

    #[error("already checked out")]
    AlreadyCheckedOut { attendance_id: i32 },

    /// An update would leave a check-out timestamp without a check-in.
    #[error("check-out cannot be recorded without a check-in")]
    CheckOutWithoutCheckIn { attendance_id: i32 },

    /// An update would leave the status out of step with the check-out time:
    /// `checkOut` needs one, `checkIn` must not have one.
    #[error("status '{status}' does not match the recorded check-out")]
    StatusMismatch {
        attendance_id: i32,
        status: &'static str,
    },

    /// An update would move a record onto a day the teacher already has a record for.
    #[error("attendance already recorded for teacher {teacher_id} on {date}")]
    DuplicateDay { teacher_id: i32, date: NaiveDate },
}

impl IntoResponse for AttendanceError {
    fn into_response(self) -> Response {
        tracing::debug!(?self, "Rejected attendance transition");

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
