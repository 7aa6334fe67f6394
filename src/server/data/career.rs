use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::career::Career;

pub struct CareerRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CareerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new career.
    ///
    /// The seed price-history entry is written by the service alongside
    /// this insert, inside the same transaction.
    ///
    /// # Returns
    /// - `Ok(Career)`: The created career
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        name: String,
        monthly_price: i32,
        duration_months: i32,
        cohort_start: DateTime<Utc>,
    ) -> Result<Career, DbErr> {
        let career = entity::career::ActiveModel {
            name: ActiveValue::Set(name),
            monthly_price: ActiveValue::Set(monthly_price),
            duration_months: ActiveValue::Set(duration_months),
            cohort_start: ActiveValue::Set(cohort_start),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Career::from_entity(career))
    }

    /// Gets a career by id.
    ///
    /// # Returns
    /// - `Ok(Some(Career))`: The career
    /// - `Ok(None)`: Career not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Career>, DbErr> {
        let career = entity::prelude::Career::find_by_id(id).one(self.db).await?;

        Ok(career.map(Career::from_entity))
    }

    /// Finds a career by exact name, optionally excluding one id.
    ///
    /// Used for the unique-name check; pass `exclude_id` when updating so
    /// a career does not collide with itself.
    pub async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<Career>, DbErr> {
        let mut query =
            entity::prelude::Career::find().filter(entity::career::Column::Name.eq(name));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::career::Column::Id.ne(exclude_id));
        }

        let career = query.one(self.db).await?;

        Ok(career.map(Career::from_entity))
    }

    /// Updates a career's fields.
    ///
    /// # Arguments
    /// - `id`: Career id
    /// - `name`, `monthly_price`, `duration_months`: New values
    /// - `cohort_start`: New value, or `None` to keep the stored one
    ///
    /// # Returns
    /// - `Ok(Career)`: The updated career
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn update(
        &self,
        id: i32,
        name: String,
        monthly_price: i32,
        duration_months: i32,
        cohort_start: Option<DateTime<Utc>>,
    ) -> Result<Career, DbErr> {
        let career = entity::prelude::Career::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Career {} not found", id)))?;

        let mut active_model: entity::career::ActiveModel = career.into();

        active_model.name = ActiveValue::Set(name);
        active_model.monthly_price = ActiveValue::Set(monthly_price);
        active_model.duration_months = ActiveValue::Set(duration_months);
        if let Some(cohort_start) = cohort_start {
            active_model.cohort_start = ActiveValue::Set(cohort_start);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Career::from_entity(updated))
    }

    /// Deletes a career by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Career::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets a page of careers ordered by id, optionally filtered by a
    /// name substring.
    ///
    /// # Arguments
    /// - `search`: Optional name filter
    /// - `page`: Page number (1-indexed)
    /// - `page_size`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((careers, total))`: Page of careers and total matching count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Career>, u64), DbErr> {
        let mut query = entity::prelude::Career::find().order_by_asc(entity::career::Column::Id);

        if let Some(search) = search {
            query = query.filter(entity::career::Column::Name.contains(search));
        }

        let paginator = query.paginate(self.db, page_size);
        let total_items = paginator.num_items().await?;
        let careers = paginator.fetch_page(page - 1).await?;

        Ok((careers.into_iter().map(Career::from_entity).collect(), total_items))
    }
}
