use crate::server::{
    error::AppError,
    model::career::{CreateCareerParams, UpdateCareerParams},
    service::career::CareerService,
};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use test_utils::builder::TestBuilder;

mod create;

/// Counts the price-history rows of a career.
async fn history_count(db: &DatabaseConnection, career_id: i32) -> Result<usize, DbErr> {
    Ok(entity::prelude::CareerPrice::find()
        .filter(entity::career_price::Column::CareerId.eq(career_id))
        .all(db)
        .await?
        .len())
}

fn params(name: &str, monthly_price: i32) -> CreateCareerParams {
    CreateCareerParams {
        name: name.to_string(),
        monthly_price,
        duration_months: 24,
        cohort_start: None,
    }
}
