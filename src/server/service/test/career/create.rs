use super::*;

/// Tests career creation seeds the price history with exactly one entry
/// carrying the initial price.
///
/// Expected: Ok(Career), history has one entry with the career's price
#[tokio::test]
async fn seeds_initial_price_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let career = CareerService::new(db)
        .create(params("Ingeniería en Sistemas", 1000))
        .await?;

    assert_eq!(career.name, "Ingeniería en Sistemas");
    assert_eq!(career.monthly_price, 1000);

    let entries = entity::prelude::CareerPrice::find()
        .filter(entity::career_price::Column::CareerId.eq(career.id))
        .all(db)
        .await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].amount, 1000);

    Ok(())
}

/// Tests the unique-name rule across careers.
///
/// Expected: second create with the same name fails with Conflict
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CareerService::new(db);
    service.create(params("Abogacía", 1000)).await?;

    let duplicate = service.create(params("Abogacía", 1500)).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests field validation: empty name, non-positive or excessive price
/// and duration are all rejected.
#[tokio::test]
async fn rejects_invalid_fields() {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CareerService::new(db);

    let cases = [
        params("   ", 1000),
        params("Medicina", 0),
        params("Medicina", 2_000_000),
        CreateCareerParams {
            name: "Medicina".to_string(),
            monthly_price: 1000,
            duration_months: 0,
            cohort_start: None,
        },
        CreateCareerParams {
            name: "Medicina".to_string(),
            monthly_price: 1000,
            duration_months: 61,
            cohort_start: None,
        },
    ];

    for case in cases {
        let result = service.create(case).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
