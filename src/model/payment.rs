//! Payment DTOs: registration payload, cancellation, the per-enrollment
//! page, and the joined rows of the global admin listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::api::{default_page, default_page_size, default_true, Page},
    server::model::payment::{Payment, PaymentListRow},
};

#[derive(Debug, Deserialize)]
pub struct RegisterPaymentRequest {
    pub enrollment_id: i32,
    pub installment_no: i32,
    /// Payment date; defaults to now. Past and future dates are accepted
    /// verbatim so historical payments can be backfilled.
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paid_in_advance: bool,
}

#[derive(Debug, Serialize)]
pub struct PaymentDto {
    pub id: i32,
    pub enrollment_id: i32,
    pub installment_no: i32,
    pub paid_at: DateTime<Utc>,
    pub amount: i32,
    pub paid_in_advance: bool,
    pub voided: bool,
}

impl From<Payment> for PaymentDto {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            enrollment_id: payment.enrollment_id,
            installment_no: payment.installment_no,
            paid_at: payment.paid_at,
            amount: payment.amount,
            paid_in_advance: payment.paid_in_advance,
            voided: payment.is_voided(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PaymentsByEnrollmentRequest {
    pub enrollment_id: i32,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default = "default_true")]
    pub include_voided: bool,
}

/// Per-enrollment payment page annotated with its enrollment.
#[derive(Debug, Serialize)]
pub struct PaymentsByEnrollmentDto {
    pub enrollment_id: i32,
    #[serde(flatten)]
    pub page: Page<PaymentDto>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentsPageRequest {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Matches against username, first/last name, DNI, and career name.
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PaymentListItemDto {
    pub id: i32,
    pub enrollment_id: i32,
    pub installment_no: i32,
    pub paid_at: DateTime<Utc>,
    pub amount: i32,
    pub paid_in_advance: bool,
    pub voided: bool,
    pub student: PaymentStudentDto,
    pub career: PaymentCareerDto,
}

#[derive(Debug, Serialize)]
pub struct PaymentStudentDto {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct PaymentCareerDto {
    pub id: i32,
    pub name: String,
}

impl From<PaymentListRow> for PaymentListItemDto {
    fn from(row: PaymentListRow) -> Self {
        Self {
            id: row.payment.id,
            enrollment_id: row.payment.enrollment_id,
            installment_no: row.payment.installment_no,
            paid_at: row.payment.paid_at,
            amount: row.payment.amount,
            paid_in_advance: row.payment.paid_in_advance,
            voided: row.payment.is_voided(),
            student: PaymentStudentDto {
                id: row.user.id,
                username: row.user.username,
                first_name: row.profile.first_name,
                last_name: row.profile.last_name,
                dni: row.profile.dni,
                email: row.profile.email,
            },
            career: PaymentCareerDto {
                id: row.career.id,
                name: row.career.name,
            },
        }
    }
}
