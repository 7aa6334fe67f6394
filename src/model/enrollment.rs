use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::api::{default_page, default_page_size},
    server::model::enrollment::EnrollmentWithCareer,
};

#[derive(Debug, Deserialize)]
pub struct CreateEnrollmentRequest {
    pub user_id: i32,
    pub career_id: i32,
}

/// Created-enrollment payload echoing the linked career.
#[derive(Debug, Serialize)]
pub struct EnrollmentDto {
    pub id: i32,
    pub user_id: i32,
    pub user_detail_id: i32,
    pub career_id: i32,
    pub career_name: String,
    pub cohort_start: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct EnrollmentsByUserRequest {
    pub user_id: i32,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

#[derive(Debug, Serialize)]
pub struct EnrollmentListItemDto {
    pub id: i32,
    pub career_id: i32,
    pub career_name: String,
    pub cohort_start: DateTime<Utc>,
}

impl From<EnrollmentWithCareer> for EnrollmentListItemDto {
    fn from(row: EnrollmentWithCareer) -> Self {
        Self {
            id: row.enrollment.id,
            career_id: row.career.id,
            career_name: row.career.name,
            cohort_start: row.career.cohort_start,
        }
    }
}
