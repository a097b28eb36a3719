use super::*;

/// Tests listing every record with its teacher.
///
/// Expected: Ok with rows ordered by date then id, each joined with its teacher
#[tokio::test]
async fn lists_records_with_teachers_in_date_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ada = factory::create_teacher(db).await?;
    let grace = factory::create_teacher(db).await?;
    let later = AttendanceFactory::new(db, ada.id)
        .date(date(2026, 1, 6))
        .build()
        .await?;
    let earlier = AttendanceFactory::new(db, grace.id)
        .date(date(2026, 1, 5))
        .build()
        .await?;
    let same_day = AttendanceFactory::new(db, ada.id)
        .date(date(2026, 1, 5))
        .build()
        .await?;

    let rows = AttendanceRepository::new(db).get_all().await?;

    let ids: Vec<i32> = rows.iter().map(|(a, _)| a.id).collect();
    assert_eq!(ids, vec![earlier.id, same_day.id, later.id]);
    assert_eq!(rows[0].1.as_ref().map(|t| t.id), Some(grace.id));
    assert_eq!(rows[2].1.as_ref().map(|t| t.id), Some(ada.id));

    Ok(())
}

#[tokio::test]
async fn returns_empty_list_without_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = AttendanceRepository::new(db).get_all().await?;

    assert!(rows.is_empty());

    Ok(())
}
