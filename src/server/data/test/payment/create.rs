use super::*;

/// Tests a created payment starts out active with the given fields.
///
/// Expected: Ok(Payment) with status Active
#[tokio::test]
async fn creates_active_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let enrollment = seed_enrollment(db).await?;
    let paid_at = Utc::now();

    let repo = PaymentRepository::new(db);
    let payment = repo.create(enrollment.id, 1, paid_at, 1000, false).await?;

    assert!(payment.id > 0);
    assert_eq!(payment.enrollment_id, enrollment.id);
    assert_eq!(payment.installment_no, 1);
    assert_eq!(payment.paid_at, paid_at);
    assert_eq!(payment.amount, 1000);
    assert!(!payment.paid_in_advance);
    assert_eq!(payment.status, PaymentStatus::Active);
    assert!(!payment.is_voided());

    Ok(())
}
