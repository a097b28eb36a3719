use crate::server::{
    data::attendance::AttendanceRepository,
    model::attendance::{AttendanceStatus, MonthPeriod, UpdateAttendanceParam},
};
use chrono::{NaiveDate, TimeZone, Utc};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::attendance::AttendanceFactory};

mod check_out;
mod count_checked_in_on;
mod create_check_in;
mod delete;
mod find_by_teacher_and_date;
mod get_all;
mod get_by_date;
mod get_by_id;
mod get_by_teacher_in_period;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn update_param(id: i32) -> UpdateAttendanceParam {
    UpdateAttendanceParam {
        id,
        teacher_id: None,
        date: None,
        status: None,
        check_in: None,
        check_out: None,
    }
}
