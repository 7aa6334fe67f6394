use sea_orm_migration::{prelude::*, schema::*};

use super::m20260715_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(UserDetail::Id))
                    .col(integer(UserDetail::UserId))
                    .col(string(UserDetail::FirstName))
                    .col(string(UserDetail::LastName))
                    .col(string_uniq(UserDetail::Dni))
                    .col(string(UserDetail::Email))
                    .col(string_len(UserDetail::Role, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_detail_user_id")
                            .from(UserDetail::Table, UserDetail::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserDetail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserDetail {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    Dni,
    Email,
    Role,
}
