//! Price-history factory for seeding career price entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating price-history entries with explicit timestamps.
///
/// `effective_from` and `created_at` both default to now; tests covering
/// the as-of lookup set them explicitly to build a timeline.
pub struct PriceEntryFactory<'a> {
    db: &'a DatabaseConnection,
    career_id: i32,
    amount: i32,
    effective_from: chrono::DateTime<Utc>,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> PriceEntryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, career_id: i32, amount: i32) -> Self {
        Self {
            db,
            career_id,
            amount,
            effective_from: Utc::now(),
            created_at: Utc::now(),
        }
    }

    pub fn effective_from(mut self, effective_from: chrono::DateTime<Utc>) -> Self {
        self.effective_from = effective_from;
        self
    }

    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the price entry into the database.
    pub async fn build(self) -> Result<entity::career_price::Model, DbErr> {
        entity::career_price::ActiveModel {
            id: ActiveValue::NotSet,
            career_id: ActiveValue::Set(self.career_id),
            amount: ActiveValue::Set(self.amount),
            effective_from: ActiveValue::Set(self.effective_from),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a price entry effective from the given instant.
pub async fn create_price_entry(
    db: &DatabaseConnection,
    career_id: i32,
    amount: i32,
    effective_from: chrono::DateTime<Utc>,
) -> Result<entity::career_price::Model, DbErr> {
    PriceEntryFactory::new(db, career_id, amount)
        .effective_from(effective_from)
        .build()
        .await
}
