//! Billing engine: ties the price-history ledger to the payment ledger.
//!
//! The single entry point for recording and voiding installment payments.
//! Price resolution is decoupled from payment creation so a payment dated
//! in the past picks the price active then, and already-recorded payments
//! are never touched by later price edits.

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        career::CareerRepository, enrollment::EnrollmentRepository, payment::PaymentRepository,
        price_history::PriceHistoryRepository, user::UserRepository,
    },
    error::AppError,
    model::payment::{Payment, PaymentListRow, RegisterPaymentParams},
    service::validate_pagination,
};

/// Resolves the monthly amount in effect for a career at `instant`.
///
/// Uses the price-history entry active at that instant, falling back to
/// the career's stored monthly price when no entry has taken effect yet
/// (a date before the career existed, or a career without history).
///
/// # Returns
/// - `Ok(amount)`: Amount in effect at `instant`
/// - `Err(AppError::NotFound)`: The career does not exist
pub async fn price_as_of<C: ConnectionTrait>(
    conn: &C,
    career_id: i32,
    instant: DateTime<Utc>,
) -> Result<i32, AppError> {
    if let Some(entry) = PriceHistoryRepository::new(conn)
        .latest_as_of(career_id, instant)
        .await?
    {
        return Ok(entry.amount);
    }

    let career = CareerRepository::new(conn)
        .find_by_id(career_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Career not found".to_string()))?;

    Ok(career.monthly_price)
}

pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an installment payment.
    ///
    /// Runs inside a single transaction so the duplicate-installment check
    /// and the insert are atomic with respect to concurrent requests for
    /// the same (enrollment, installment) pair:
    ///
    /// 1. the enrollment must exist;
    /// 2. `paid_at` defaults to now; caller-supplied dates, past or
    ///    future, are stored verbatim;
    /// 3. no active payment may exist for the installment;
    /// 4. the amount is resolved from the price history at `paid_at`;
    /// 5. the payment is inserted with status `Active`.
    ///
    /// # Returns
    /// - `Ok(Payment)`: The created payment with its resolved amount
    /// - `Err(AppError::NotFound)`: Enrollment does not exist
    /// - `Err(AppError::Conflict)`: Installment already paid and not voided
    /// - `Err(AppError::Validation)`: Non-positive id or installment number
    pub async fn register_payment(
        &self,
        params: RegisterPaymentParams,
    ) -> Result<Payment, AppError> {
        if params.enrollment_id <= 0 || params.installment_no <= 0 {
            return Err(AppError::Validation(
                "Ids and installment number must be greater than 0".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let enrollment = EnrollmentRepository::new(&txn)
            .find_by_id(params.enrollment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        let existing = PaymentRepository::new(&txn)
            .find_active_by_installment(enrollment.id, params.installment_no)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "Installment {} has already been paid for this enrollment",
                params.installment_no
            )));
        }

        let paid_at = params.paid_at.unwrap_or_else(Utc::now);
        let amount = price_as_of(&txn, enrollment.career_id, paid_at).await?;

        let payment = PaymentRepository::new(&txn)
            .create(
                enrollment.id,
                params.installment_no,
                paid_at,
                amount,
                params.paid_in_advance,
            )
            .await?;

        txn.commit().await?;

        Ok(payment)
    }

    /// Voids a payment.
    ///
    /// Voiding is monotonic: an already-voided payment cannot be voided
    /// again, and nothing un-voids a payment. The row itself is kept.
    ///
    /// # Returns
    /// - `Ok(Payment)`: The voided payment
    /// - `Err(AppError::NotFound)`: Payment does not exist
    /// - `Err(AppError::Conflict)`: Payment is already voided
    pub async fn void_payment(&self, payment_id: i32) -> Result<Payment, AppError> {
        let txn = self.db.begin().await?;

        let payment = PaymentRepository::new(&txn)
            .find_by_id(payment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        if payment.is_voided() {
            return Err(AppError::Conflict("Payment is already voided".to_string()));
        }

        let voided = PaymentRepository::new(&txn).void(payment_id).await?;

        txn.commit().await?;

        Ok(voided)
    }

    /// Gets a page of an enrollment's payments, highest installment first.
    ///
    /// # Returns
    /// - `Ok((payments, total))`: Page of payments and total count
    /// - `Err(AppError::NotFound)`: Enrollment does not exist
    pub async fn get_paginated_by_enrollment(
        &self,
        enrollment_id: i32,
        include_voided: bool,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Payment>, u64), AppError> {
        if enrollment_id <= 0 {
            return Err(AppError::Validation(
                "enrollment_id must be greater than 0".to_string(),
            ));
        }
        validate_pagination(page, page_size)?;

        EnrollmentRepository::new(self.db)
            .find_by_id(enrollment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        let (payments, total) = PaymentRepository::new(self.db)
            .get_paginated_by_enrollment(enrollment_id, include_voided, page, page_size)
            .await?;

        Ok((payments, total))
    }

    /// Gets a page of all payments joined with student and career data,
    /// newest payment first. Backs the admin payment screen.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<PaymentListRow>, u64), AppError> {
        validate_pagination(page, page_size)?;

        let (payments, total) = PaymentRepository::new(self.db)
            .get_paginated(search, page, page_size)
            .await?;

        let enrollment_repo = EnrollmentRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let career_repo = CareerRepository::new(self.db);

        let mut rows = Vec::new();

        for payment in payments {
            let enrollment = enrollment_repo.find_by_id(payment.enrollment_id).await?;

            let Some(enrollment) = enrollment else {
                continue;
            };

            let profile = user_repo.find_profile_by_id(enrollment.user_detail_id).await?;
            let career = career_repo.find_by_id(enrollment.career_id).await?;

            if let Some(profile) = profile {
                let user = user_repo.find_by_id(profile.user_id).await?;

                if let (Some(user), Some(career)) = (user, career) {
                    rows.push(PaymentListRow {
                        payment,
                        user,
                        profile,
                        career,
                    });
                }
            }
        }

        Ok((rows, total))
    }

    /// Hard-deletes a payment. Administrative path only, with no business
    /// invariant beyond existence; voiding is the regular cancellation.
    ///
    /// # Returns
    /// - `Ok(())`: Payment deleted
    /// - `Err(AppError::NotFound)`: Payment does not exist
    pub async fn delete_payment(&self, payment_id: i32) -> Result<(), AppError> {
        let repo = PaymentRepository::new(self.db);

        repo.find_by_id(payment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        repo.delete(payment_id).await?;

        Ok(())
    }
}
