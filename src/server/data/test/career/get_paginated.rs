use super::*;

/// Tests pagination returns page-sized chunks with the full match count.
///
/// Expected: page 1 has `page_size` items, total counts every career
#[tokio::test]
async fn pages_careers_with_total_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::career::create_career(db).await?;
    }

    let repo = CareerRepository::new(db);
    let (first_page, total) = repo.get_paginated(None, 1, 2).await?;

    assert_eq!(first_page.len(), 2);
    assert_eq!(total, 3);

    let (second_page, _) = repo.get_paginated(None, 2, 2).await?;
    assert_eq!(second_page.len(), 1);

    Ok(())
}

/// Tests the name filter matches substrings only.
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::career::CareerFactory::new(db)
        .name("Ingeniería en Sistemas")
        .build()
        .await?;
    factory::career::CareerFactory::new(db)
        .name("Abogacía")
        .build()
        .await?;

    let repo = CareerRepository::new(db);
    let (matches, total) = repo.get_paginated(Some("Sistemas"), 1, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Ingeniería en Sistemas");

    Ok(())
}
