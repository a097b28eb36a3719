use super::*;

#[tokio::test]
async fn finds_record_for_teacher_and_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let other = factory::create_teacher(db).await?;
    let record = AttendanceFactory::new(db, teacher.id)
        .date(date(2026, 1, 5))
        .build()
        .await?;
    AttendanceFactory::new(db, other.id)
        .date(date(2026, 1, 5))
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);

    let found = repo
        .find_by_teacher_and_date(teacher.id, date(2026, 1, 5))
        .await?;
    assert_eq!(found.map(|r| r.id), Some(record.id));

    let other_day = repo
        .find_by_teacher_and_date(teacher.id, date(2026, 1, 6))
        .await?;
    assert!(other_day.is_none());

    Ok(())
}
