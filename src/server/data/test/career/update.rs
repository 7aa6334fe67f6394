use super::*;

/// Tests updating career fields; a `None` cohort start keeps the stored
/// value.
///
/// Expected: Ok(Career) with new values and original cohort start
#[tokio::test]
async fn updates_fields_keeping_cohort_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let career = factory::career::CareerFactory::new(db)
        .monthly_price(1000)
        .build()
        .await?;

    let repo = CareerRepository::new(db);
    let updated = repo
        .update(career.id, "Renamed".to_string(), 1200, 30, None)
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.monthly_price, 1200);
    assert_eq!(updated.duration_months, 30);
    assert_eq!(updated.cohort_start, career.cohort_start);

    Ok(())
}

/// Tests updating a missing career surfaces `RecordNotFound`.
#[tokio::test]
async fn returns_record_not_found_for_missing_career() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CareerRepository::new(db);
    let result = repo.update(999, "Ghost".to_string(), 1000, 24, None).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
