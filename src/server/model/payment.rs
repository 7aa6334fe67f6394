//! Domain models for installment payments.

use chrono::{DateTime, Utc};
pub use entity::payment::PaymentStatus;

use crate::server::model::{career::Career, user::{User, UserProfile}};

/// One paid installment of an enrollment.
///
/// `amount` is fixed at creation from the price-history lookup and is
/// never recomputed, even if history is amended later. The status enum
/// makes the void transition explicit: `Active -> Voided`, never back.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub enrollment_id: i32,
    pub installment_no: i32,
    pub paid_at: DateTime<Utc>,
    pub amount: i32,
    pub paid_in_advance: bool,
    pub status: PaymentStatus,
}

impl Payment {
    /// Converts an entity model to a payment domain model at the
    /// repository boundary.
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            enrollment_id: entity.enrollment_id,
            installment_no: entity.installment_no,
            paid_at: entity.paid_at,
            amount: entity.amount,
            paid_in_advance: entity.paid_in_advance,
            status: entity.status,
        }
    }

    pub fn is_voided(&self) -> bool {
        match self.status {
            PaymentStatus::Active => false,
            PaymentStatus::Voided => true,
        }
    }
}

/// Parameters for registering a payment through the billing engine.
#[derive(Debug, Clone)]
pub struct RegisterPaymentParams {
    pub enrollment_id: i32,
    pub installment_no: i32,
    /// Defaults to now; past and future dates are stored verbatim.
    pub paid_at: Option<DateTime<Utc>>,
    pub paid_in_advance: bool,
}

/// One row of the global admin payment listing, joined to the paying
/// student and the career the enrollment belongs to.
#[derive(Debug, Clone)]
pub struct PaymentListRow {
    pub payment: Payment,
    pub user: User,
    pub profile: UserProfile,
    pub career: Career,
}
