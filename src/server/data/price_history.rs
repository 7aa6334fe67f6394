use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::career::PriceEntry;

/// Append-only ledger of price-change events per career.
///
/// Entries are never mutated or deleted: a price change appends a new row,
/// and point-in-time queries pick the entry in effect at a given instant.
pub struct PriceHistoryRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PriceHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a price-change entry.
    ///
    /// No validation that the amount differs from the previous entry:
    /// price changes are driven by career edits, and consecutive edits to
    /// the same value are legal.
    ///
    /// # Arguments
    /// - `career_id`: Career the entry belongs to
    /// - `amount`: Monthly price from `effective_from` on
    /// - `effective_from`: Instant the amount takes effect
    ///
    /// # Returns
    /// - `Ok(PriceEntry)`: The appended entry
    /// - `Err(DbErr)`: Database error
    pub async fn record(
        &self,
        career_id: i32,
        amount: i32,
        effective_from: DateTime<Utc>,
    ) -> Result<PriceEntry, DbErr> {
        let entry = entity::career_price::ActiveModel {
            career_id: ActiveValue::Set(career_id),
            amount: ActiveValue::Set(amount),
            effective_from: ActiveValue::Set(effective_from),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PriceEntry::from_entity(entry))
    }

    /// Gets the entry in effect at `instant` for a career.
    ///
    /// Picks the entry with the greatest `effective_from <= instant`.
    /// Entries sharing the same `effective_from` are resolved by greatest
    /// `created_at`, then greatest id: the most recently inserted wins.
    ///
    /// # Returns
    /// - `Ok(Some(PriceEntry))`: Entry in effect at `instant`
    /// - `Ok(None)`: No entry is in effect yet (caller falls back to the
    ///   career's stored price)
    /// - `Err(DbErr)`: Database error
    pub async fn latest_as_of(
        &self,
        career_id: i32,
        instant: DateTime<Utc>,
    ) -> Result<Option<PriceEntry>, DbErr> {
        let entry = entity::prelude::CareerPrice::find()
            .filter(entity::career_price::Column::CareerId.eq(career_id))
            .filter(entity::career_price::Column::EffectiveFrom.lte(instant))
            .order_by_desc(entity::career_price::Column::EffectiveFrom)
            .order_by_desc(entity::career_price::Column::CreatedAt)
            .order_by_desc(entity::career_price::Column::Id)
            .one(self.db)
            .await?;

        Ok(entry.map(PriceEntry::from_entity))
    }

    /// Gets a page of a career's price history, newest effective date
    /// first.
    ///
    /// # Arguments
    /// - `career_id`: Career whose history to read
    /// - `page`: Page number (1-indexed)
    /// - `page_size`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((entries, total))`: Page of entries and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated_by_career(
        &self,
        career_id: i32,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<PriceEntry>, u64), DbErr> {
        let query = entity::prelude::CareerPrice::find()
            .filter(entity::career_price::Column::CareerId.eq(career_id))
            .order_by_desc(entity::career_price::Column::EffectiveFrom);

        let paginator = query.paginate(self.db, page_size);
        let total_items = paginator.num_items().await?;
        let entries = paginator.fetch_page(page - 1).await?;

        Ok((
            entries.into_iter().map(PriceEntry::from_entity).collect(),
            total_items,
        ))
    }
}
