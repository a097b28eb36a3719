use super::*;

#[tokio::test]
async fn deletes_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let record = factory::create_attendance(db, teacher.id).await?;

    let deleted = AttendanceRepository::new(db).delete(record.id).await?;

    assert!(deleted);
    assert!(Attendance::find_by_id(record.id).one(db).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = AttendanceRepository::new(db).delete(123).await?;

    assert!(!deleted);

    Ok(())
}
