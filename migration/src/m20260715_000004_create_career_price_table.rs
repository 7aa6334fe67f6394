use sea_orm_migration::{prelude::*, schema::*};

use super::m20260715_000003_create_career_table::Career;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CareerPrice::Table)
                    .if_not_exists()
                    .col(pk_auto(CareerPrice::Id))
                    .col(integer(CareerPrice::CareerId))
                    .col(integer(CareerPrice::Amount))
                    .col(timestamp(CareerPrice::EffectiveFrom))
                    .col(
                        timestamp(CareerPrice::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_career_price_career_id")
                            .from(CareerPrice::Table, CareerPrice::CareerId)
                            .to(Career::Table, Career::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Point-in-time lookups scan by career and effective date.
        manager
            .create_index(
                Index::create()
                    .name("idx_career_price_career_effective")
                    .table(CareerPrice::Table)
                    .col(CareerPrice::CareerId)
                    .col(CareerPrice::EffectiveFrom)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CareerPrice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CareerPrice {
    Table,
    Id,
    CareerId,
    Amount,
    EffectiveFrom,
    CreatedAt,
}
