use super::*;

#[tokio::test]
async fn fetches_record_with_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let record = factory::create_attendance(db, teacher.id).await?;
    let repo = AttendanceRepository::new(db);

    let (attendance, joined) = repo
        .get_by_id_with_teacher(record.id)
        .await?
        .expect("record should exist");
    assert_eq!(attendance, record);
    assert_eq!(joined, Some(teacher));

    assert_eq!(repo.get_by_id(record.id).await?, Some(record));

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AttendanceRepository::new(db);

    assert!(repo.get_by_id(7).await?.is_none());
    assert!(repo.get_by_id_with_teacher(7).await?.is_none());

    Ok(())
}
