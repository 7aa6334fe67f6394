use crate::server::data::payment::PaymentRepository;
use chrono::{Duration, Utc};
use entity::payment::PaymentStatus;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod void;

/// Creates the user -> profile -> career -> enrollment chain that payment
/// rows hang off.
async fn seed_enrollment(db: &DatabaseConnection) -> Result<entity::enrollment::Model, DbErr> {
    let (_, detail) = factory::user::create_student(db).await?;
    let career = factory::career::create_career(db).await?;
    factory::enrollment::create_enrollment(db, detail.id, career.id).await
}
