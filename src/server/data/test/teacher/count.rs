use super::*;

#[tokio::test]
async fn counts_all_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_teacher(db).await?;
    factory::create_teacher(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
