use super::*;

#[tokio::test]
async fn reports_existing_and_missing_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_teacher(db).await?;
    let repo = TeacherRepository::new(db);

    assert!(repo.exists(teacher.id).await?);
    assert!(!repo.exists(teacher.id + 1).await?);

    Ok(())
}
