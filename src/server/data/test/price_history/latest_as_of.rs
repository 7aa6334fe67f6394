use super::*;

/// Tests the as-of lookup picks the entry with the greatest effective
/// date not after the queried instant.
///
/// Timeline: 1000 at t0, 1200 at t0+10d, 1500 at t0+20d.
///
/// Expected: each window resolves to the amount that was in effect
#[tokio::test]
async fn picks_entry_in_effect_at_instant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .with_table(entity::prelude::CareerPrice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let career = factory::career::create_career(db).await?;
    let t0 = Utc::now() - Duration::days(30);

    factory::career_price::create_price_entry(db, career.id, 1000, t0).await?;
    factory::career_price::create_price_entry(db, career.id, 1200, t0 + Duration::days(10)).await?;
    factory::career_price::create_price_entry(db, career.id, 1500, t0 + Duration::days(20)).await?;

    let repo = PriceHistoryRepository::new(db);

    let at_day_5 = repo.latest_as_of(career.id, t0 + Duration::days(5)).await?;
    assert_eq!(at_day_5.map(|e| e.amount), Some(1000));

    let at_day_10 = repo.latest_as_of(career.id, t0 + Duration::days(10)).await?;
    assert_eq!(at_day_10.map(|e| e.amount), Some(1200));

    let at_day_15 = repo.latest_as_of(career.id, t0 + Duration::days(15)).await?;
    assert_eq!(at_day_15.map(|e| e.amount), Some(1200));

    let at_day_25 = repo.latest_as_of(career.id, t0 + Duration::days(25)).await?;
    assert_eq!(at_day_25.map(|e| e.amount), Some(1500));

    Ok(())
}

/// Tests querying before the first entry yields nothing; the caller falls
/// back to the career's stored price.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_before_first_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .with_table(entity::prelude::CareerPrice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let career = factory::career::create_career(db).await?;
    let t0 = Utc::now();

    factory::career_price::create_price_entry(db, career.id, 1000, t0).await?;

    let repo = PriceHistoryRepository::new(db);
    let before = repo.latest_as_of(career.id, t0 - Duration::days(1)).await?;

    assert!(before.is_none());

    Ok(())
}

/// Tests the tie-break on equal effective dates: the most recently
/// inserted entry wins (greatest created_at, then greatest id).
///
/// Expected: the later insertion's amount
#[tokio::test]
async fn breaks_same_instant_ties_by_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .with_table(entity::prelude::CareerPrice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let career = factory::career::create_career(db).await?;
    let effective = Utc::now() - Duration::days(1);
    let created = Utc::now() - Duration::hours(2);

    factory::career_price::PriceEntryFactory::new(db, career.id, 1000)
        .effective_from(effective)
        .created_at(created)
        .build()
        .await?;
    factory::career_price::PriceEntryFactory::new(db, career.id, 1100)
        .effective_from(effective)
        .created_at(created + Duration::hours(1))
        .build()
        .await?;

    let repo = PriceHistoryRepository::new(db);
    let winner = repo.latest_as_of(career.id, Utc::now()).await?;

    assert_eq!(winner.map(|e| e.amount), Some(1100));

    Ok(())
}

/// Tests entries of one career never leak into another's lookup.
#[tokio::test]
async fn scopes_lookup_to_career() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .with_table(entity::prelude::CareerPrice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let career = factory::career::create_career(db).await?;
    let other = factory::career::create_career(db).await?;

    factory::career_price::create_price_entry(db, other.id, 9999, Utc::now() - Duration::days(1))
        .await?;

    let repo = PriceHistoryRepository::new(db);
    let found = repo.latest_as_of(career.id, Utc::now()).await?;

    assert!(found.is_none());

    Ok(())
}
