use super::*;

/// Tests voiding flips the status and leaves every other field untouched.
///
/// Expected: Ok(Payment) with status Voided, same amount/date/installment
#[tokio::test]
async fn voids_payment_keeping_other_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let enrollment = seed_enrollment(db).await?;
    let payment = factory::payment::PaymentFactory::new(db, enrollment.id)
        .installment_no(2)
        .amount(1200)
        .build()
        .await?;

    let repo = PaymentRepository::new(db);
    let voided = repo.void(payment.id).await?;

    assert_eq!(voided.id, payment.id);
    assert_eq!(voided.status, PaymentStatus::Voided);
    assert!(voided.is_voided());
    assert_eq!(voided.installment_no, 2);
    assert_eq!(voided.amount, 1200);
    assert_eq!(voided.paid_at, payment.paid_at);

    Ok(())
}

/// Tests voiding a missing payment surfaces `RecordNotFound`.
#[tokio::test]
async fn returns_record_not_found_for_missing_payment() {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);
    let result = repo.void(999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
