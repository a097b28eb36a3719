use super::*;

/// Tests checking out an open record.
///
/// Expected: Ok(Some) with check_out set, status checkOut and check_in unchanged
#[tokio::test]
async fn sets_check_out_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let check_in = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();
    let record = AttendanceFactory::new(db, teacher.id)
        .check_in(Some(check_in))
        .build()
        .await?;
    let at = Utc.with_ymd_and_hms(2026, 1, 5, 16, 30, 0).unwrap();

    let updated = AttendanceRepository::new(db)
        .check_out(record.id, at)
        .await?
        .expect("open record should be checked out");

    assert_eq!(updated.check_out, Some(at));
    assert_eq!(updated.check_in, Some(check_in));
    assert_eq!(updated.status, AttendanceStatus::CheckOut.as_str());
    assert_eq!(updated.updated_at, at);

    Ok(())
}

/// Tests that a record already checked out is left untouched.
///
/// Expected: Ok(None) and the original check-out time preserved
#[tokio::test]
async fn ignores_already_checked_out_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let first_out = Utc.with_ymd_and_hms(2026, 1, 5, 16, 0, 0).unwrap();
    let record = AttendanceFactory::new(db, teacher.id)
        .status("checkOut")
        .check_out(Some(first_out))
        .build()
        .await?;

    let result = AttendanceRepository::new(db)
        .check_out(record.id, Utc::now())
        .await?;

    assert!(result.is_none());
    let stored = Attendance::find_by_id(record.id).one(db).await?.unwrap();
    assert_eq!(stored.check_out, Some(first_out));

    Ok(())
}
