use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260715_000002_create_user_detail_table::UserDetail,
    m20260715_000003_create_career_table::Career,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    .col(integer(Enrollment::UserDetailId))
                    .col(integer(Enrollment::CareerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_user_detail_id")
                            .from(Enrollment::Table, Enrollment::UserDetailId)
                            .to(UserDetail::Table, UserDetail::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_career_id")
                            .from(Enrollment::Table, Enrollment::CareerId)
                            .to(Career::Table, Career::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A person enrolls in a given career at most once.
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollment_user_detail_career")
                    .table(Enrollment::Table)
                    .col(Enrollment::UserDetailId)
                    .col(Enrollment::CareerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    Table,
    Id,
    UserDetailId,
    CareerId,
}
