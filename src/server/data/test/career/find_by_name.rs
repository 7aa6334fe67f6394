use super::*;

/// Tests the unique-name lookup finds an existing career by exact name.
///
/// Expected: Ok(Some(Career))
#[tokio::test]
async fn finds_career_by_exact_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let career = factory::career::CareerFactory::new(db)
        .name("Abogacía")
        .build()
        .await?;

    let repo = CareerRepository::new(db);

    let found = repo.find_by_name("Abogacía", None).await?;
    assert_eq!(found.map(|c| c.id), Some(career.id));

    let missing = repo.find_by_name("Medicina", None).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the exclusion id used when updating: a career must not collide
/// with itself.
///
/// Expected: Ok(None) when the only match is the excluded id
#[tokio::test]
async fn excludes_given_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Career)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let career = factory::career::CareerFactory::new(db)
        .name("Abogacía")
        .build()
        .await?;

    let repo = CareerRepository::new(db);

    let found = repo.find_by_name("Abogacía", Some(career.id)).await?;
    assert!(found.is_none());

    Ok(())
}
