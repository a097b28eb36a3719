use super::*;

#[tokio::test]
async fn returns_stored_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = TeacherFactory::new(db)
        .first_name("Ada")
        .last_name("Lovelace")
        .build()
        .await?;

    let teacher = TeacherRepository::new(db)
        .get_by_id(created.id)
        .await?
        .expect("teacher should exist");

    assert_eq!(teacher.id, created.id);
    assert_eq!(teacher.full_name(), "Ada Lovelace");

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

    let teacher = TeacherRepository::new(db).get_by_id(42).await?;

    assert!(teacher.is_none());

    Ok(())
}
