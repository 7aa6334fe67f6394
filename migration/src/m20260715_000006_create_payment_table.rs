use sea_orm_migration::{prelude::*, schema::*};

use super::m20260715_000005_create_enrollment_table::Enrollment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::EnrollmentId))
                    .col(integer(Payment::InstallmentNo))
                    .col(timestamp(Payment::PaidAt))
                    .col(integer(Payment::Amount))
                    .col(boolean(Payment::PaidInAdvance))
                    .col(string_len(Payment::Status, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_enrollment_id")
                            .from(Payment::Table, Payment::EnrollmentId)
                            .to(Enrollment::Table, Enrollment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Authoritative guard for the one-active-payment-per-installment
        // rule; the service-level check only produces the friendlier error.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX idx_payment_active_installment \
                 ON payments (enrollment_id, installment_no) \
                 WHERE status = 'active'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    Id,
    EnrollmentId,
    InstallmentNo,
    PaidAt,
    Amount,
    PaidInAdvance,
    Status,
}
