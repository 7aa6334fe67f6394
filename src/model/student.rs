//! DTOs for the student self-service routes under `/me`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct StudentCareerDto {
    pub enrollment_id: i32,
    pub career_id: i32,
    pub career_name: String,
    pub monthly_price: i32,
    pub duration_months: i32,
    pub cohort_start: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct StudentCareersDto {
    pub careers: Vec<StudentCareerDto>,
}

/// Optional filters for `GET /me/payments`.
#[derive(Debug, Deserialize)]
pub struct StudentPaymentsQuery {
    pub career_id: Option<i32>,
    pub enrollment_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct StudentPaymentDto {
    pub id: i32,
    pub enrollment_id: i32,
    pub career_id: i32,
    pub career_name: String,
    pub installment_no: i32,
    pub paid_at: DateTime<Utc>,
    pub amount: i32,
    pub paid_in_advance: bool,
    pub voided: bool,
}

#[derive(Debug, Serialize)]
pub struct StudentPaymentsDto {
    pub payments: Vec<StudentPaymentDto>,
}
