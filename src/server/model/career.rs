//! Domain models for careers and their price history.

use chrono::{DateTime, Utc};

/// Academic program with a monthly tuition price.
///
/// `monthly_price` is the price currently in effect; past values live in
/// the price history and are reachable through the as-of lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Career {
    pub id: i32,
    pub name: String,
    pub monthly_price: i32,
    pub duration_months: i32,
    pub cohort_start: DateTime<Utc>,
}

impl Career {
    /// Converts an entity model to a career domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::career::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            monthly_price: entity.monthly_price,
            duration_months: entity.duration_months,
            cohort_start: entity.cohort_start,
        }
    }
}

/// One append-only price-change event for a career.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEntry {
    pub id: i32,
    pub career_id: i32,
    pub amount: i32,
    /// Instant from which this amount applies.
    pub effective_from: DateTime<Utc>,
    /// Insertion timestamp; breaks ties between entries sharing the same
    /// `effective_from`.
    pub created_at: DateTime<Utc>,
}

impl PriceEntry {
    pub fn from_entity(entity: entity::career_price::Model) -> Self {
        Self {
            id: entity.id,
            career_id: entity.career_id,
            amount: entity.amount,
            effective_from: entity.effective_from,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new career.
#[derive(Debug, Clone)]
pub struct CreateCareerParams {
    pub name: String,
    pub monthly_price: i32,
    pub duration_months: i32,
    /// Defaults to now when unspecified.
    pub cohort_start: Option<DateTime<Utc>>,
}

/// Parameters for updating an existing career.
#[derive(Debug, Clone)]
pub struct UpdateCareerParams {
    pub name: String,
    pub monthly_price: i32,
    pub duration_months: i32,
    /// Keeps the stored value when unspecified.
    pub cohort_start: Option<DateTime<Utc>>,
}
