pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_user_table;
mod m20260715_000002_create_user_detail_table;
mod m20260715_000003_create_career_table;
mod m20260715_000004_create_career_price_table;
mod m20260715_000005_create_enrollment_table;
mod m20260715_000006_create_payment_table;
mod m20260716_000007_create_news_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_user_table::Migration),
            Box::new(m20260715_000002_create_user_detail_table::Migration),
            Box::new(m20260715_000003_create_career_table::Migration),
            Box::new(m20260715_000004_create_career_price_table::Migration),
            Box::new(m20260715_000005_create_enrollment_table::Migration),
            Box::new(m20260715_000006_create_payment_table::Migration),
            Box::new(m20260716_000007_create_news_table::Migration),
        ]
    }
}
