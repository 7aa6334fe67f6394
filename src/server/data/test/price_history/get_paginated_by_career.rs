use super::*;

/// Tests the history page comes back newest effective date first with a
/// full count.
///
/// Expected: descending effective_from ordering, total across pages
#[tokio::test]
async fn orders_newest_effective_first() -> Result<(), DbErr> {
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
    let (entries, total) = repo.get_paginated_by_career(career.id, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].amount, 1500);
    assert_eq!(entries[1].amount, 1200);

    let (second_page, _) = repo.get_paginated_by_career(career.id, 2, 2).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].amount, 1000);

    Ok(())
}
