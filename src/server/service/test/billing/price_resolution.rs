use super::*;

/// Tests price resolution monotonicity across a three-entry timeline.
///
/// Entries: a1 at t1, a2 at t2, a3 at t3 with t1 < t2 < t3. Each window
/// [tn, tn+1) resolves to an, anything at or after t3 resolves to a3, and
/// anything before t1 falls back to the career's stored price.
#[tokio::test]
async fn resolves_each_window_to_its_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let career = factory::career::CareerFactory::new(db)
        .monthly_price(900)
        .build()
        .await?;

    let t1 = Utc::now() - Duration::days(30);
    let t2 = t1 + Duration::days(10);
    let t3 = t1 + Duration::days(20);
    factory::career_price::create_price_entry(db, career.id, 1000, t1).await?;
    factory::career_price::create_price_entry(db, career.id, 1100, t2).await?;
    factory::career_price::create_price_entry(db, career.id, 1200, t3).await?;

    // Exactly at each boundary the new amount is already in effect.
    assert_eq!(price_as_of(db, career.id, t1).await?, 1000);
    assert_eq!(price_as_of(db, career.id, t1 + Duration::days(5)).await?, 1000);
    assert_eq!(price_as_of(db, career.id, t2).await?, 1100);
    assert_eq!(price_as_of(db, career.id, t2 + Duration::days(5)).await?, 1100);
    assert_eq!(price_as_of(db, career.id, t3).await?, 1200);
    assert_eq!(price_as_of(db, career.id, Utc::now()).await?, 1200);

    // Before the first entry: stored current price.
    assert_eq!(price_as_of(db, career.id, t1 - Duration::days(1)).await?, 900);

    Ok(())
}

/// Tests the career-missing case: no history and no career row is an
/// error, not a silent zero.
#[tokio::test]
async fn rejects_missing_career() {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = price_as_of(db, 999, Utc::now()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
