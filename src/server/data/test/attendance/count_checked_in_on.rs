use super::*;

/// Tests counting check-ins for a day.
///
/// Records without a check-in timestamp and records on other days are not counted.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_records_with_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let day = date(2026, 1, 5);
    let a = factory::create_teacher(db).await?;
    let b = factory::create_teacher(db).await?;
    let c = factory::create_teacher(db).await?;

    AttendanceFactory::new(db, a.id).date(day).build().await?;
    AttendanceFactory::new(db, b.id)
        .date(day)
        .checked_out()
        .build()
        .await?;
    AttendanceFactory::new(db, c.id)
        .date(day)
        .check_in(None)
        .build()
        .await?;
    AttendanceFactory::new(db, c.id)
        .date(date(2026, 1, 6))
        .build()
        .await?;

    let count = AttendanceRepository::new(db).count_checked_in_on(day).await?;

    assert_eq!(count, 2);

    Ok(())
}
