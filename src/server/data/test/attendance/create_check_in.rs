use super::*;

/// Tests inserting a check-in record.
///
/// Expected: Ok with status checkIn, check_in set and check_out unset
#[tokio::test]
async fn creates_checked_in_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let at = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();

    let record = AttendanceRepository::new(db)
        .create_check_in(teacher.id, date(2026, 1, 5), at)
        .await?;

    assert_eq!(record.teacher_id, teacher.id);
    assert_eq!(record.date, date(2026, 1, 5));
    assert_eq!(record.status, "checkIn");
    assert_eq!(record.check_in, Some(at));
    assert_eq!(record.check_out, None);

    Ok(())
}

/// Tests that a second record for the same teacher and day violates the unique index.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_second_record_for_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let repo = AttendanceRepository::new(db);
    let at = Utc::now();

    repo.create_check_in(teacher.id, date(2026, 1, 5), at).await?;
    let result = repo.create_check_in(teacher.id, date(2026, 1, 5), at).await;

    let err = result.expect_err("duplicate day should be rejected");
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(Attendance::find().count(db).await?, 1);

    Ok(())
}

/// Tests that different teachers may check in on the same day.
///
/// Expected: Ok with two records
#[tokio::test]
async fn allows_different_teachers_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_teacher(db).await?;
    let second = factory::create_teacher(db).await?;
    let repo = AttendanceRepository::new(db);

    repo.create_check_in(first.id, date(2026, 1, 5), Utc::now())
        .await?;
    repo.create_check_in(second.id, date(2026, 1, 5), Utc::now())
        .await?;

    assert_eq!(Attendance::find().count(db).await?, 2);

    Ok(())
}
