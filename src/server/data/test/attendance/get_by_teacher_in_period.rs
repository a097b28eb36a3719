use super::*;

/// Tests that the monthly query covers exactly the month for the one teacher.
///
/// Records on the last day of the previous month, the first day of the next month
/// and of another teacher inside the month are excluded.
///
/// Expected: Ok with the first and last day of February, in date order
#[tokio::test]
async fn returns_records_inside_month_for_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let other = factory::create_teacher(db).await?;

    for day in [date(2024, 1, 31), date(2024, 2, 29), date(2024, 2, 1), date(2024, 3, 1)] {
        AttendanceFactory::new(db, teacher.id)
            .date(day)
            .build()
            .await?;
    }
    AttendanceFactory::new(db, other.id)
        .date(date(2024, 2, 10))
        .build()
        .await?;

    let rows = AttendanceRepository::new(db)
        .get_by_teacher_in_period(teacher.id, MonthPeriod::new(2, 2024).unwrap())
        .await?;

    let dates: Vec<NaiveDate> = rows.iter().map(|(a, _)| a.date).collect();
    assert_eq!(dates, vec![date(2024, 2, 1), date(2024, 2, 29)]);
    assert!(rows
        .iter()
        .all(|(_, t)| t.as_ref().map(|t| t.id) == Some(teacher.id)));

    Ok(())
}
