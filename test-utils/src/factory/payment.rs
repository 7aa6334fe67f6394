//! Payment factory for seeding installment payments.

use chrono::Utc;
use entity::payment::PaymentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments with customizable fields.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    enrollment_id: i32,
    installment_no: i32,
    paid_at: chrono::DateTime<Utc>,
    amount: i32,
    paid_in_advance: bool,
    status: PaymentStatus,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory with default values.
    ///
    /// Defaults:
    /// - installment_no: `1`
    /// - paid_at: now
    /// - amount: `1000`
    /// - paid_in_advance: `false`
    /// - status: `PaymentStatus::Active`
    pub fn new(db: &'a DatabaseConnection, enrollment_id: i32) -> Self {
        Self {
            db,
            enrollment_id,
            installment_no: 1,
            paid_at: Utc::now(),
            amount: 1000,
            paid_in_advance: false,
            status: PaymentStatus::Active,
        }
    }

    pub fn installment_no(mut self, installment_no: i32) -> Self {
        self.installment_no = installment_no;
        self
    }

    pub fn paid_at(mut self, paid_at: chrono::DateTime<Utc>) -> Self {
        self.paid_at = paid_at;
        self
    }

    pub fn amount(mut self, amount: i32) -> Self {
        self.amount = amount;
        self
    }

    pub fn paid_in_advance(mut self, paid_in_advance: bool) -> Self {
        self.paid_in_advance = paid_in_advance;
        self
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the payment entity into the database.
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: ActiveValue::NotSet,
            enrollment_id: ActiveValue::Set(self.enrollment_id),
            installment_no: ActiveValue::Set(self.installment_no),
            paid_at: ActiveValue::Set(self.paid_at),
            amount: ActiveValue::Set(self.amount),
            paid_in_advance: ActiveValue::Set(self.paid_in_advance),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active payment for the given enrollment and installment.
pub async fn create_payment(
    db: &DatabaseConnection,
    enrollment_id: i32,
    installment_no: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, enrollment_id)
        .installment_no(installment_no)
        .build()
        .await
}
