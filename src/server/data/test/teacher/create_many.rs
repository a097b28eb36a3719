use super::*;

/// Tests inserting several teachers in one call.
///
/// Expected: Ok with count equal to the number of inputs and all rows stored
#[tokio::test]
async fn inserts_all_teachers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);
    let params: Vec<CreateTeacherParam> = vec![
        fields("Ada", "Lovelace", "ada@school.edu", "Mathematics"),
        fields("Grace", "Hopper", "grace@school.edu", "Computing"),
        fields("Marie", "Curie", "marie@school.edu", "Chemistry"),
    ];

    let count = repo.create_many(params).await?;

    assert_eq!(count, 3);
    assert_eq!(Teacher::find().count(db).await?, 3);

    Ok(())
}

/// Tests that an empty list is a no-op.
///
/// Expected: Ok(0) and nothing stored
#[tokio::test]
async fn empty_list_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let count = TeacherRepository::new(db).create_many(vec![]).await?;

    assert_eq!(count, 0);
    assert_eq!(Teacher::find().count(db).await?, 0);

    Ok(())
}
