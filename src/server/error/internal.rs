use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored attendance row carries a status label the service does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Attendance {id} has unknown stored status '{value}'")]
    UnknownStoredStatus {
        /// ID of the attendance row
        id: i32,
        /// The status value found in the database
        value: String,
    },

    /// An attendance row references a teacher that could not be loaded alongside it.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Attendance {attendance_id} references missing teacher {teacher_id}")]
    MissingTeacher { attendance_id: i32, teacher_id: i32 },
}
