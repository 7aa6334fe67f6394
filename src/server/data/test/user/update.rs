use super::*;
use sea_orm::EntityTrait;

/// Tests updating the username leaves the password untouched.
#[tokio::test]
async fn updates_username_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("jperez")
        .password("secret123")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo.update_username(user.id, "jp2026".to_string()).await?;

    assert_eq!(updated.username, "jp2026");

    let row = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.password, "secret123");

    Ok(())
}

/// Tests updating a profile row rewrites all editable fields.
#[tokio::test]
async fn updates_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserDetail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, detail) = factory::user::create_student(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            detail.id,
            "Ana".to_string(),
            "García".to_string(),
            "28999888".to_string(),
            "agarcia@example.com".to_string(),
            Role::Admin,
        )
        .await?;

    assert_eq!(updated.first_name, "Ana");
    assert_eq!(updated.last_name, "García");
    assert_eq!(updated.dni, "28999888");
    assert_eq!(updated.role, Role::Admin);
    assert_eq!(updated.user_id, detail.user_id);

    Ok(())
}
