use super::*;

/// Tests the profile lookup distinguishes accounts with and without a
/// detail row; the missing-profile state is explicit, never defaulted.
///
/// Expected: Some for a student account, None for a bare account
#[tokio::test]
async fn returns_none_for_account_without_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserDetail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (with_profile, detail) = factory::user::create_student(db).await?;
    let bare = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_profile_by_user(with_profile.id).await?;
    assert_eq!(found.map(|p| p.id), Some(detail.id));

    let missing = repo.find_profile_by_user(bare.id).await?;
    assert!(missing.is_none());

    Ok(())
}
