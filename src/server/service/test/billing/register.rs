use super::*;

/// Tests the amount charged reflects the price in effect at the payment
/// date, not the career's current stored price.
///
/// Timeline: 1000 effective 20 days ago, 1200 effective 10 days ago; the
/// payment is dated 15 days ago.
///
/// Expected: amount 1000
#[tokio::test]
async fn charges_price_in_effect_at_paid_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (career, enrollment) = seed_enrollment(db).await?;
    let now = Utc::now();
    factory::career_price::create_price_entry(db, career.id, 1000, now - Duration::days(20))
        .await?;
    factory::career_price::create_price_entry(db, career.id, 1200, now - Duration::days(10))
        .await?;

    let payment = BillingService::new(db)
        .register_payment(RegisterPaymentParams {
            enrollment_id: enrollment.id,
            installment_no: 1,
            paid_at: Some(now - Duration::days(15)),
            paid_in_advance: false,
        })
        .await?;

    assert_eq!(payment.amount, 1000);
    assert_eq!(payment.installment_no, 1);
    assert!(!payment.is_voided());

    Ok(())
}

/// Tests the fallback: a career without history charges its stored
/// monthly price.
///
/// Expected: amount equals the career's monthly_price
#[tokio::test]
async fn falls_back_to_current_price_without_history() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (career, enrollment) = seed_enrollment(db).await?;

    let payment = BillingService::new(db)
        .register_payment(RegisterPaymentParams {
            enrollment_id: enrollment.id,
            installment_no: 1,
            paid_at: None,
            paid_in_advance: false,
        })
        .await?;

    assert_eq!(payment.amount, career.monthly_price);

    Ok(())
}

/// Tests an unspecified payment date defaults to now.
#[tokio::test]
async fn defaults_paid_at_to_now() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, enrollment) = seed_enrollment(db).await?;

    let before = Utc::now();
    let payment = BillingService::new(db)
        .register_payment(RegisterPaymentParams {
            enrollment_id: enrollment.id,
            installment_no: 1,
            paid_at: None,
            paid_in_advance: false,
        })
        .await?;
    let after = Utc::now();

    assert!(payment.paid_at >= before && payment.paid_at <= after);

    Ok(())
}

/// Tests the duplicate-installment rule: a second active payment for the
/// same installment conflicts.
///
/// Expected: first Ok, second Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_active_installment() {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, enrollment) = seed_enrollment(db).await.unwrap();
    let service = BillingService::new(db);

    let params = RegisterPaymentParams {
        enrollment_id: enrollment.id,
        installment_no: 1,
        paid_at: None,
        paid_in_advance: false,
    };

    service.register_payment(params.clone()).await.unwrap();
    let second = service.register_payment(params).await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
}

/// Tests voiding re-opens the installment, and the repayment amount is
/// recomputed from the history at its own payment date.
///
/// The first payment (dated before the raise) charges 1000; after voiding
/// it, the repayment dated after the raise charges 1200.
#[tokio::test]
async fn allows_repayment_after_void_with_recomputed_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (career, enrollment) = seed_enrollment(db).await?;
    let now = Utc::now();
    factory::career_price::create_price_entry(db, career.id, 1000, now - Duration::days(20))
        .await?;
    factory::career_price::create_price_entry(db, career.id, 1200, now - Duration::days(10))
        .await?;

    let service = BillingService::new(db);

    let first = service
        .register_payment(RegisterPaymentParams {
            enrollment_id: enrollment.id,
            installment_no: 1,
            paid_at: Some(now - Duration::days(15)),
            paid_in_advance: false,
        })
        .await?;
    assert_eq!(first.amount, 1000);

    service.void_payment(first.id).await?;

    let repaid = service
        .register_payment(RegisterPaymentParams {
            enrollment_id: enrollment.id,
            installment_no: 1,
            paid_at: Some(now),
            paid_in_advance: false,
        })
        .await?;

    assert_eq!(repaid.amount, 1200);
    assert_ne!(repaid.id, first.id);

    Ok(())
}

/// Tests a payment against a missing enrollment fails with NotFound.
#[tokio::test]
async fn rejects_missing_enrollment() {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BillingService::new(db)
        .register_payment(RegisterPaymentParams {
            enrollment_id: 999,
            installment_no: 1,
            paid_at: None,
            paid_in_advance: false,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests non-positive ids and installment numbers are rejected before any
/// query runs.
#[tokio::test]
async fn rejects_non_positive_inputs() {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BillingService::new(db);

    let bad_enrollment = service
        .register_payment(RegisterPaymentParams {
            enrollment_id: 0,
            installment_no: 1,
            paid_at: None,
            paid_in_advance: false,
        })
        .await;
    assert!(matches!(bad_enrollment, Err(AppError::Validation(_))));

    let bad_installment = service
        .register_payment(RegisterPaymentParams {
            enrollment_id: 1,
            installment_no: -2,
            paid_at: None,
            paid_in_advance: false,
        })
        .await;
    assert!(matches!(bad_installment, Err(AppError::Validation(_))));
}
