use super::*;

/// Tests overwriting every mutable field of a teacher.
///
/// Expected: Ok(Some) with new values and a refreshed update timestamp
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_teacher(db).await?;

    let repo = TeacherRepository::new(db);
    let updated = repo
        .update(UpdateTeacherParam {
            id: existing.id,
            fields: fields("Katherine", "Johnson", "kj@school.edu", "Physics"),
        })
        .await?
        .expect("teacher should exist");

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.first_name, "Katherine");
    assert_eq!(updated.last_name, "Johnson");
    assert_eq!(updated.email, "kj@school.edu");
    assert_eq!(updated.subject, "Physics");
    assert_eq!(updated.phone, "555-0100");
    assert_eq!(updated.created_at, existing.created_at);
    assert!(updated.updated_at >= existing.updated_at);

    Ok(())
}

/// Tests updating a teacher that does not exist.
///
/// Expected: Ok(None) and nothing created
#[tokio::test]
async fn returns_none_for_missing_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeacherRepository::new(db)
        .update(UpdateTeacherParam {
            id: 999,
            fields: fields("Ghost", "Teacher", "ghost@school.edu", ""),
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(Teacher::find().count(db).await?, 0);

    Ok(())
}
