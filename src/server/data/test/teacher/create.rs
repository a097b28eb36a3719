use super::*;

/// Tests creating a teacher.
///
/// Verifies that the stored row carries the submitted fields along with a generated
/// id and matching creation/update timestamps.
///
/// Expected: Ok with teacher created
#[tokio::test]
async fn creates_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);
    let teacher = repo
        .create(fields("Ada", "Lovelace", "ada@school.edu", "Mathematics"))
        .await?;

    assert!(teacher.id > 0);
    assert_eq!(teacher.first_name, "Ada");
    assert_eq!(teacher.subject, "Mathematics");
    assert_eq!(teacher.created_at, teacher.updated_at);

    let stored = Teacher::find_by_id(teacher.id).one(db).await?;
    assert_eq!(stored.unwrap().email, "ada@school.edu");

    Ok(())
}

/// Tests that consecutive creates receive distinct ids.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);
    let first = repo
        .create(fields("Ada", "Lovelace", "ada@school.edu", ""))
        .await?;
    let second = repo
        .create(fields("Grace", "Hopper", "grace@school.edu", ""))
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
