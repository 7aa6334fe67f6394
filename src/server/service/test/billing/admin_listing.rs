use super::*;

/// Tests the admin listing enriches each payment with its student and
/// career.
#[tokio::test]
async fn joins_student_and_career_data() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("jperez")
        .build()
        .await?;
    let detail = factory::user::UserDetailFactory::new(db, user.id)
        .first_name("Juan")
        .last_name("Pérez")
        .build()
        .await?;
    let career = factory::career::CareerFactory::new(db)
        .name("Ingeniería en Sistemas")
        .build()
        .await?;
    let enrollment = factory::enrollment::create_enrollment(db, detail.id, career.id).await?;
    let payment = factory::payment::create_payment(db, enrollment.id, 1).await?;

    let (rows, total) = BillingService::new(db).get_paginated(None, 1, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].payment.id, payment.id);
    assert_eq!(rows[0].user.username, "jperez");
    assert_eq!(rows[0].profile.first_name, "Juan");
    assert_eq!(rows[0].career.name, "Ingeniería en Sistemas");

    Ok(())
}

/// Tests the search narrows the listing by student surname.
#[tokio::test]
async fn searches_by_last_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let detail = factory::user::UserDetailFactory::new(db, user.id)
        .last_name("Pérez")
        .build()
        .await?;
    let career = factory::career::create_career(db).await?;
    let enrollment = factory::enrollment::create_enrollment(db, detail.id, career.id).await?;
    factory::payment::create_payment(db, enrollment.id, 1).await?;

    let (_other_career, other_enrollment) = seed_enrollment(db).await?;
    factory::payment::create_payment(db, other_enrollment.id, 1).await?;

    let service = BillingService::new(db);

    let (matching, total) = service.get_paginated(Some("Pérez"), 1, 20).await?;
    assert_eq!(total, 1);
    assert_eq!(matching[0].profile.last_name, "Pérez");

    let (all, total_all) = service.get_paginated(None, 1, 20).await?;
    assert_eq!(total_all, 2);
    assert_eq!(all.len(), 2);

    Ok(())
}
