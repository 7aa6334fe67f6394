use super::*;

/// Tests creating an account and attaching its profile row.
///
/// Expected: Ok for both inserts, profile linked to the user
#[tokio::test]
async fn creates_account_with_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserDetail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = repo
        .create("jperez".to_string(), "secret123".to_string())
        .await?;
    let profile = repo
        .create_profile(
            user.id,
            "Juan".to_string(),
            "Pérez".to_string(),
            "30111222".to_string(),
            "jperez@example.com".to_string(),
            Role::Student,
        )
        .await?;

    assert_eq!(user.username, "jperez");
    assert_eq!(profile.user_id, user.id);
    assert_eq!(profile.dni, "30111222");
    assert_eq!(profile.role, Role::Student);

    Ok(())
}
