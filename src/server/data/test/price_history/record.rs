use super::*;

/// Tests appending a price entry stores amount and effective date.
///
/// Expected: Ok(PriceEntry) with the given values
#[tokio::test]
async fn appends_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .with_table(entity::prelude::CareerPrice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let career = factory::career::create_career(db).await?;
    let effective_from = Utc::now();

    let repo = PriceHistoryRepository::new(db);
    let entry = repo.record(career.id, 1500, effective_from).await?;

    assert!(entry.id > 0);
    assert_eq!(entry.career_id, career.id);
    assert_eq!(entry.amount, 1500);
    assert_eq!(entry.effective_from, effective_from);

    Ok(())
}

/// Tests consecutive entries with the same amount are accepted.
///
/// Price changes are driven by edit events, not enforced distinctness, so
/// the ledger never rejects a duplicate amount.
///
/// Expected: Ok for both entries
#[tokio::test]
async fn allows_duplicate_consecutive_amounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .with_table(entity::prelude::CareerPrice)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let career = factory::career::create_career(db).await?;

    let repo = PriceHistoryRepository::new(db);
    let first = repo.record(career.id, 1000, Utc::now()).await?;
    let second = repo.record(career.id, 1000, Utc::now()).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.amount, second.amount);

    Ok(())
}
