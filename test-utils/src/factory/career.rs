//! Career factory for creating test career entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test careers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::career::CareerFactory;
///
/// let career = CareerFactory::new(&db)
///     .name("Ingeniería en Sistemas")
///     .monthly_price(1500)
///     .build()
///     .await?;
/// ```
pub struct CareerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    monthly_price: i32,
    duration_months: i32,
    cohort_start: chrono::DateTime<Utc>,
}

impl<'a> CareerFactory<'a> {
    /// Creates a new CareerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Career {id}"` where id is auto-incremented
    /// - monthly_price: `1000`
    /// - duration_months: `24`
    /// - cohort_start: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Career {}", id),
            monthly_price: 1000,
            duration_months: 24,
            cohort_start: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn monthly_price(mut self, monthly_price: i32) -> Self {
        self.monthly_price = monthly_price;
        self
    }

    pub fn duration_months(mut self, duration_months: i32) -> Self {
        self.duration_months = duration_months;
        self
    }

    pub fn cohort_start(mut self, cohort_start: chrono::DateTime<Utc>) -> Self {
        self.cohort_start = cohort_start;
        self
    }

    /// Builds and inserts the career entity into the database.
    pub async fn build(self) -> Result<entity::career::Model, DbErr> {
        entity::career::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            monthly_price: ActiveValue::Set(self.monthly_price),
            duration_months: ActiveValue::Set(self.duration_months),
            cohort_start: ActiveValue::Set(self.cohort_start),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a career with default values.
///
/// Shorthand for `CareerFactory::new(db).build().await`. Note this inserts
/// only the career row; seed a price entry through the price factory when
/// the test needs history.
pub async fn create_career(db: &DatabaseConnection) -> Result<entity::career::Model, DbErr> {
    CareerFactory::new(db).build().await
}
