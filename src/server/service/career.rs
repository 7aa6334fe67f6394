//! Career catalog: CRUD plus the price-history workflow.
//!
//! Price changes only happen here. Creation seeds the history with the
//! initial price; an update whose price differs from the stored one
//! appends a delta entry effective immediately, in the same transaction as
//! the career row update, so "append history + update price" is
//! all-or-nothing.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{career::CareerRepository, price_history::PriceHistoryRepository},
    error::AppError,
    model::career::{Career, CreateCareerParams, PriceEntry, UpdateCareerParams},
    service::validate_pagination,
};

const MAX_NAME_LEN: usize = 50;
const MAX_MONTHLY_PRICE: i32 = 1_000_000;
const MAX_DURATION_MONTHS: i32 = 60;

pub struct CareerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CareerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a career and seeds its price history with the initial
    /// price, effective now. Both writes happen in one transaction.
    ///
    /// # Returns
    /// - `Ok(Career)`: The created career
    /// - `Err(AppError::Conflict)`: A career with that name exists
    /// - `Err(AppError::Validation)`: Field validation failed
    pub async fn create(&self, params: CreateCareerParams) -> Result<Career, AppError> {
        let name = Self::validate_fields(&params.name, params.monthly_price, params.duration_months)?;

        let txn = self.db.begin().await?;

        if CareerRepository::new(&txn)
            .find_by_name(&name, None)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A career with that name already exists".to_string(),
            ));
        }

        let cohort_start = params.cohort_start.unwrap_or_else(Utc::now);

        let career = CareerRepository::new(&txn)
            .create(name, params.monthly_price, params.duration_months, cohort_start)
            .await?;

        PriceHistoryRepository::new(&txn)
            .record(career.id, career.monthly_price, Utc::now())
            .await?;

        txn.commit().await?;

        Ok(career)
    }

    /// Gets a career by id.
    pub async fn get(&self, career_id: i32) -> Result<Career, AppError> {
        CareerRepository::new(self.db)
            .find_by_id(career_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Career not found".to_string()))
    }

    /// Updates a career.
    ///
    /// When the submitted price differs from the stored one, a history
    /// entry effective now is appended before the career row is updated.
    /// This is the only path besides creation that writes price history;
    /// an unchanged price appends nothing.
    ///
    /// # Returns
    /// - `Ok(Career)`: The updated career
    /// - `Err(AppError::NotFound)`: Career does not exist
    /// - `Err(AppError::Conflict)`: Another career has the submitted name
    /// - `Err(AppError::Validation)`: Field validation failed
    pub async fn update(
        &self,
        career_id: i32,
        params: UpdateCareerParams,
    ) -> Result<Career, AppError> {
        let name = Self::validate_fields(&params.name, params.monthly_price, params.duration_months)?;

        let txn = self.db.begin().await?;

        let career = CareerRepository::new(&txn)
            .find_by_id(career_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Career not found".to_string()))?;

        if CareerRepository::new(&txn)
            .find_by_name(&name, Some(career_id))
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Another career with that name already exists".to_string(),
            ));
        }

        if params.monthly_price != career.monthly_price {
            PriceHistoryRepository::new(&txn)
                .record(career_id, params.monthly_price, Utc::now())
                .await?;
        }

        let updated = CareerRepository::new(&txn)
            .update(
                career_id,
                name,
                params.monthly_price,
                params.duration_months,
                params.cohort_start,
            )
            .await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a career. Its price history goes with it.
    ///
    /// # Returns
    /// - `Ok(())`: Career deleted
    /// - `Err(AppError::NotFound)`: Career does not exist
    pub async fn delete(&self, career_id: i32) -> Result<(), AppError> {
        let repo = CareerRepository::new(self.db);

        repo.find_by_id(career_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Career not found".to_string()))?;

        repo.delete(career_id).await?;

        Ok(())
    }

    /// Gets a page of careers, optionally filtered by a name substring.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Career>, u64), AppError> {
        validate_pagination(page, page_size)?;

        let (careers, total) = CareerRepository::new(self.db)
            .get_paginated(search, page, page_size)
            .await?;

        Ok((careers, total))
    }

    /// Gets a page of a career's price history, newest effective date
    /// first.
    ///
    /// # Returns
    /// - `Ok((career, entries, total))`: The career and its history page
    /// - `Err(AppError::NotFound)`: Career does not exist
    pub async fn get_prices_paginated(
        &self,
        career_id: i32,
        page: u64,
        page_size: u64,
    ) -> Result<(Career, Vec<PriceEntry>, u64), AppError> {
        if career_id <= 0 {
            return Err(AppError::Validation(
                "career_id must be greater than 0".to_string(),
            ));
        }
        validate_pagination(page, page_size)?;

        let career = self.get(career_id).await?;

        let (entries, total) = PriceHistoryRepository::new(self.db)
            .get_paginated_by_career(career_id, page, page_size)
            .await?;

        Ok((career, entries, total))
    }

    fn validate_fields(
        name: &str,
        monthly_price: i32,
        duration_months: i32,
    ) -> Result<String, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Career name is required".to_string()));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(AppError::Validation(format!(
                "Career name cannot exceed {} characters",
                MAX_NAME_LEN
            )));
        }
        if monthly_price <= 0 {
            return Err(AppError::Validation(
                "Monthly price must be greater than 0".to_string(),
            ));
        }
        if monthly_price > MAX_MONTHLY_PRICE {
            return Err(AppError::Validation("Monthly price is too high".to_string()));
        }
        if duration_months <= 0 {
            return Err(AppError::Validation(
                "Duration in months must be greater than 0".to_string(),
            ));
        }
        if duration_months > MAX_DURATION_MONTHS {
            return Err(AppError::Validation(format!(
                "Duration cannot exceed {} months",
                MAX_DURATION_MONTHS
            )));
        }

        Ok(name.to_string())
    }
}
