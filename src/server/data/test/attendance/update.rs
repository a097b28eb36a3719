use super::*;

/// Tests that only the provided fields change.
///
/// Expected: Ok with status and check_out replaced, everything else kept
#[tokio::test]
async fn applies_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let existing = AttendanceFactory::new(db, teacher.id)
        .date(date(2026, 1, 5))
        .build()
        .await?;
    let check_out = Utc.with_ymd_and_hms(2026, 1, 5, 17, 0, 0).unwrap();

    let updated = AttendanceRepository::new(db)
        .update(
            existing.clone(),
            UpdateAttendanceParam {
                status: Some(AttendanceStatus::CheckOut),
                check_out: Some(check_out),
                ..update_param(existing.id)
            },
        )
        .await?;

    assert_eq!(updated.status, "checkOut");
    assert_eq!(updated.check_out, Some(check_out));
    assert_eq!(updated.check_in, existing.check_in);
    assert_eq!(updated.date, existing.date);
    assert_eq!(updated.teacher_id, existing.teacher_id);

    Ok(())
}

/// Tests moving a record onto a day the teacher already has a record for.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_move_onto_occupied_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    AttendanceFactory::new(db, teacher.id)
        .date(date(2026, 1, 5))
        .build()
        .await?;
    let movable = AttendanceFactory::new(db, teacher.id)
        .date(date(2026, 1, 6))
        .build()
        .await?;

    let result = AttendanceRepository::new(db)
        .update(
            movable.clone(),
            UpdateAttendanceParam {
                date: Some(date(2026, 1, 5)),
                ..update_param(movable.id)
            },
        )
        .await;

    let err = result.expect_err("occupied day should be rejected");
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
