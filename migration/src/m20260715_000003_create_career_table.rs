use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Career::Table)
                    .if_not_exists()
                    .col(pk_auto(Career::Id))
                    .col(string_uniq(Career::Name))
                    .col(integer(Career::MonthlyPrice))
                    .col(integer(Career::DurationMonths))
                    .col(timestamp(Career::CohortStart))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Career::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Career {
    Table,
    Id,
    Name,
    MonthlyPrice,
    DurationMonths,
    CohortStart,
}
