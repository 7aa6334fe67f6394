use super::*;

/// Tests the global admin listing orders by payment date descending, then
/// id descending.
///
/// Expected: newest paid_at first
#[tokio::test]
async fn orders_by_paid_at_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let enrollment = seed_enrollment(db).await?;
    let old = factory::payment::PaymentFactory::new(db, enrollment.id)
        .installment_no(1)
        .paid_at(Utc::now() - Duration::days(10))
        .build()
        .await?;
    let recent = factory::payment::PaymentFactory::new(db, enrollment.id)
        .installment_no(2)
        .paid_at(Utc::now())
        .build()
        .await?;

    let repo = PaymentRepository::new(db);
    let (page, total) = repo.get_paginated(None, 1, 20).await?;

    assert_eq!(total, 2);
    assert_eq!(page[0].id, recent.id);
    assert_eq!(page[1].id, old.id);

    Ok(())
}

/// Tests the search joins: a career-name match only returns payments of
/// enrollments in that career.
#[tokio::test]
async fn searches_by_career_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, detail) = factory::user::create_student(db).await?;
    let systems = factory::career::CareerFactory::new(db)
        .name("Ingeniería en Sistemas")
        .build()
        .await?;
    let law = factory::career::CareerFactory::new(db)
        .name("Abogacía")
        .build()
        .await?;
    let systems_enrollment =
        factory::enrollment::create_enrollment(db, detail.id, systems.id).await?;
    let law_enrollment = factory::enrollment::create_enrollment(db, detail.id, law.id).await?;

    let in_systems = factory::payment::create_payment(db, systems_enrollment.id, 1).await?;
    factory::payment::create_payment(db, law_enrollment.id, 1).await?;

    let repo = PaymentRepository::new(db);
    let (page, total) = repo.get_paginated(Some("Sistemas"), 1, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(page[0].id, in_systems.id);

    Ok(())
}

/// Tests the search also matches the student's username.
#[tokio::test]
async fn searches_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("jperez")
        .build()
        .await?;
    let detail = factory::user::UserDetailFactory::new(db, user.id).build().await?;
    let career = factory::career::create_career(db).await?;
    let enrollment = factory::enrollment::create_enrollment(db, detail.id, career.id).await?;
    let payment = factory::payment::create_payment(db, enrollment.id, 1).await?;

    // A second student whose payment must not match.
    let other = seed_enrollment(db).await?;
    factory::payment::create_payment(db, other.id, 1).await?;

    let repo = PaymentRepository::new(db);
    let (page, total) = repo.get_paginated(Some("jperez"), 1, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(page[0].id, payment.id);

    Ok(())
}
