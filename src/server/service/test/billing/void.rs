use super::*;

/// Tests voiding an active payment succeeds and keeps the row.
#[tokio::test]
async fn voids_active_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, enrollment) = seed_enrollment(db).await?;
    let payment = factory::payment::create_payment(db, enrollment.id, 1).await?;

    let voided = BillingService::new(db).void_payment(payment.id).await?;

    assert_eq!(voided.id, payment.id);
    assert!(voided.is_voided());
    assert_eq!(voided.amount, payment.amount);

    Ok(())
}

/// Tests void monotonicity: a second void of the same payment conflicts,
/// and nothing ever un-voids a payment.
///
/// Expected: first Ok, second Err(Conflict)
#[tokio::test]
async fn double_void_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, enrollment) = seed_enrollment(db).await?;
    let payment = factory::payment::create_payment(db, enrollment.id, 1).await?;

    let service = BillingService::new(db);
    service.void_payment(payment.id).await?;

    let second = service.void_payment(payment.id).await;
    assert!(matches!(second, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests voiding a missing payment fails with NotFound.
#[tokio::test]
async fn rejects_missing_payment() {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BillingService::new(db).void_payment(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests the hard-delete admin path removes the row entirely.
#[tokio::test]
async fn delete_removes_payment_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, enrollment) = seed_enrollment(db).await?;
    let payment = factory::payment::create_payment(db, enrollment.id, 1).await?;

    let service = BillingService::new(db);
    service.delete_payment(payment.id).await?;

    let missing = service.delete_payment(payment.id).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
