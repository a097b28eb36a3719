use crate::server::{
    error::{attendance::AttendanceError, AppError},
    model::{
        attendance::{
            AttendanceStatus, MarkAttendanceParam, MonthPeriod, MonthlyReportParam,
            UpdateAttendanceParam,
        },
        teacher::{CreateTeachersParam, TeacherFields, TeacherSearchParam, UpdateTeacherParam},
    },
    service::{attendance::AttendanceService, teacher::TeacherService},
};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::attendance::AttendanceFactory};


fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A fixed local instant on the given day.
fn local_at(y: i32, m: u32, d: u32, hour: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap()
}

fn fields(first_name: &str, email: &str) -> TeacherFields {
    TeacherFields {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        email: email.to_string(),
        subject: "Science".to_string(),
        phone: String::new(),
    }
}
