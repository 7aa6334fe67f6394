use super::*;

/// Tests a valid login issues a token carrying the profile's role.
#[tokio::test]
async fn issues_token_with_profile_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserDetail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("admin1")
        .password("secret123")
        .build()
        .await?;
    factory::user::UserDetailFactory::new(db, user.id)
        .role(Role::Admin)
        .build()
        .await?;

    let tokens = TokenService::new("test-secret");
    let outcome = AuthService::new(db, &tokens)
        .login("admin1", "secret123")
        .await?
        .expect("credentials should be accepted");

    assert_eq!(outcome.user_id, user.id);
    assert_eq!(outcome.username, "admin1");
    assert_eq!(outcome.role, Role::Admin);

    let claims = tokens.verify(&outcome.token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.role, Role::Admin);

    Ok(())
}

/// Tests wrong password and unknown username both come back as None, not
/// as an error.
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserDetail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("jperez")
        .password("secret123")
        .build()
        .await?;

    let tokens = TokenService::new("test-secret");
    let service = AuthService::new(db, &tokens);

    assert!(service.login("jperez", "wrong").await?.is_none());
    assert!(service.login("ghost", "secret123").await?.is_none());

    Ok(())
}

/// Tests an account without a profile logs in with the student role.
#[tokio::test]
async fn defaults_to_student_role_without_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserDetail)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("bare")
        .password("secret123")
        .build()
        .await?;

    let tokens = TokenService::new("test-secret");
    let outcome = AuthService::new(db, &tokens)
        .login("bare", "secret123")
        .await?
        .expect("credentials should be accepted");

    assert_eq!(outcome.role, Role::Student);

    Ok(())
}
