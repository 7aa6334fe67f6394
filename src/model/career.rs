//! Career DTOs: CRUD payloads, paginated listing, and the price-history
//! page returned by `POST /careers/prices/paginated`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::api::{default_page, default_page_size, Page},
    server::model::career::{Career, PriceEntry},
};

#[derive(Debug, Serialize)]
pub struct CareerDto {
    pub id: i32,
    pub name: String,
    pub monthly_price: i32,
    pub duration_months: i32,
    pub cohort_start: DateTime<Utc>,
}

impl From<Career> for CareerDto {
    fn from(career: Career) -> Self {
        Self {
            id: career.id,
            name: career.name,
            monthly_price: career.monthly_price,
            duration_months: career.duration_months,
            cohort_start: career.cohort_start,
        }
    }
}

/// Body for both `POST /careers` and `PUT /careers/{id}`.
///
/// `cohort_start` is optional: creation defaults it to now, updates keep
/// the stored value.
#[derive(Debug, Deserialize)]
pub struct SaveCareerRequest {
    pub name: String,
    pub monthly_price: i32,
    pub duration_months: i32,
    pub cohort_start: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CareersPageRequest {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CareerPricesPageRequest {
    pub career_id: i32,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

#[derive(Debug, Serialize)]
pub struct PriceEntryDto {
    pub id: i32,
    pub amount: i32,
    pub effective_from: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<PriceEntry> for PriceEntryDto {
    fn from(entry: PriceEntry) -> Self {
        Self {
            id: entry.id,
            amount: entry.amount,
            effective_from: entry.effective_from,
            created_at: entry.created_at,
        }
    }
}

/// Price-history page annotated with the career it belongs to.
#[derive(Debug, Serialize)]
pub struct CareerPricesDto {
    pub career_id: i32,
    pub career_name: String,
    #[serde(flatten)]
    pub page: Page<PriceEntryDto>,
}
