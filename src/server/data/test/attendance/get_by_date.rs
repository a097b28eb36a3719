use super::*;

#[tokio::test]
async fn returns_every_teacher_on_that_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ada = factory::create_teacher(db).await?;
    let grace = factory::create_teacher(db).await?;
    AttendanceFactory::new(db, ada.id)
        .date(date(2026, 1, 5))
        .build()
        .await?;
    AttendanceFactory::new(db, grace.id)
        .date(date(2026, 1, 5))
        .build()
        .await?;
    AttendanceFactory::new(db, ada.id)
        .date(date(2026, 1, 6))
        .build()
        .await?;

    let rows = AttendanceRepository::new(db)
        .get_by_date(date(2026, 1, 5))
        .await?;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|(a, _)| a.date == date(2026, 1, 5)));

    Ok(())
}
