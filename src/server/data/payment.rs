use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::payment::{Payment, PaymentStatus};

/// Ledger of installment payments.
///
/// Stores one row per paid (or voided) installment per enrollment. The
/// duplicate-installment rule only counts `Active` rows, so a voided
/// installment can be paid again.
pub struct PaymentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a payment with status `Active`.
    ///
    /// Callers run this inside a transaction together with the
    /// duplicate-installment check; the partial unique index on
    /// (enrollment_id, installment_no, status = 'active') backs the rule
    /// against concurrent writers.
    ///
    /// # Returns
    /// - `Ok(Payment)`: The created payment
    /// - `Err(DbErr)`: Database error, including unique-index violations
    pub async fn create(
        &self,
        enrollment_id: i32,
        installment_no: i32,
        paid_at: DateTime<Utc>,
        amount: i32,
        paid_in_advance: bool,
    ) -> Result<Payment, DbErr> {
        let payment = entity::payment::ActiveModel {
            enrollment_id: ActiveValue::Set(enrollment_id),
            installment_no: ActiveValue::Set(installment_no),
            paid_at: ActiveValue::Set(paid_at),
            amount: ActiveValue::Set(amount),
            paid_in_advance: ActiveValue::Set(paid_in_advance),
            status: ActiveValue::Set(PaymentStatus::Active),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(payment))
    }

    /// Gets a payment by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Payment>, DbErr> {
        let payment = entity::prelude::Payment::find_by_id(id).one(self.db).await?;

        Ok(payment.map(Payment::from_entity))
    }

    /// Finds the active payment for an (enrollment, installment) pair.
    ///
    /// Voided rows are excluded; at most one row can match thanks to the
    /// partial unique index.
    pub async fn find_active_by_installment(
        &self,
        enrollment_id: i32,
        installment_no: i32,
    ) -> Result<Option<Payment>, DbErr> {
        let payment = entity::prelude::Payment::find()
            .filter(entity::payment::Column::EnrollmentId.eq(enrollment_id))
            .filter(entity::payment::Column::InstallmentNo.eq(installment_no))
            .filter(entity::payment::Column::Status.eq(PaymentStatus::Active))
            .one(self.db)
            .await?;

        Ok(payment.map(Payment::from_entity))
    }

    /// Flips a payment's status to `Voided`; all other fields are
    /// immutable.
    ///
    /// The caller checks the payment exists and is currently active; this
    /// method only performs the update.
    ///
    /// # Returns
    /// - `Ok(Payment)`: The voided payment
    /// - `Err(DbErr)`: Database error, including `RecordNotFound`
    pub async fn void(&self, id: i32) -> Result<Payment, DbErr> {
        let payment = entity::prelude::Payment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Payment {} not found", id)))?;

        let mut active_model: entity::payment::ActiveModel = payment.into();
        active_model.status = ActiveValue::Set(PaymentStatus::Voided);

        let voided = active_model.update(self.db).await?;

        Ok(Payment::from_entity(voided))
    }

    /// Counts all payments for an enrollment, voided included.
    ///
    /// Backs the enrollment-delete guard: an enrollment with any payment
    /// rows cannot be removed.
    pub async fn count_by_enrollment(&self, enrollment_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::EnrollmentId.eq(enrollment_id))
            .count(self.db)
            .await
    }

    /// Gets a page of an enrollment's payments, highest installment
    /// first.
    ///
    /// # Arguments
    /// - `enrollment_id`: Enrollment whose payments to list
    /// - `include_voided`: Whether voided rows appear in the listing
    /// - `page`: Page number (1-indexed)
    /// - `page_size`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((payments, total))`: Page of payments and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated_by_enrollment(
        &self,
        enrollment_id: i32,
        include_voided: bool,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Payment>, u64), DbErr> {
        let mut query = entity::prelude::Payment::find()
            .filter(entity::payment::Column::EnrollmentId.eq(enrollment_id));

        if !include_voided {
            query = query.filter(entity::payment::Column::Status.eq(PaymentStatus::Active));
        }

        let query = query.order_by_desc(entity::payment::Column::InstallmentNo);

        let paginator = query.paginate(self.db, page_size);
        let total_items = paginator.num_items().await?;
        let payments = paginator.fetch_page(page - 1).await?;

        Ok((
            payments.into_iter().map(Payment::from_entity).collect(),
            total_items,
        ))
    }

    /// Gets a page of all payments for the admin listing, newest first.
    ///
    /// Joins through enrollment to the student profile, account, and
    /// career so `search` can match against username, first or last name,
    /// DNI, or career name. Ordered by payment date descending, then id
    /// descending.
    ///
    /// # Returns
    /// - `Ok((payments, total))`: Page of payments and total count
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Payment>, u64), DbErr> {
        let mut query = entity::prelude::Payment::find()
            .join(JoinType::InnerJoin, entity::payment::Relation::Enrollment.def())
            .join(
                JoinType::InnerJoin,
                entity::enrollment::Relation::UserDetail.def(),
            )
            .join(JoinType::InnerJoin, entity::user_detail::Relation::User.def())
            .join(JoinType::InnerJoin, entity::enrollment::Relation::Career.def());

        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::Username.contains(search))
                    .add(entity::user_detail::Column::FirstName.contains(search))
                    .add(entity::user_detail::Column::LastName.contains(search))
                    .add(entity::user_detail::Column::Dni.contains(search))
                    .add(entity::career::Column::Name.contains(search)),
            );
        }

        let query = query
            .order_by_desc(entity::payment::Column::PaidAt)
            .order_by_desc(entity::payment::Column::Id);

        let paginator = query.paginate(self.db, page_size);
        let total_items = paginator.num_items().await?;
        let payments = paginator.fetch_page(page - 1).await?;

        Ok((
            payments.into_iter().map(Payment::from_entity).collect(),
            total_items,
        ))
    }

    /// Lists all payments of an enrollment ordered by installment number,
    /// for the student self-service view.
    pub async fn list_by_enrollment(&self, enrollment_id: i32) -> Result<Vec<Payment>, DbErr> {
        let payments = entity::prelude::Payment::find()
            .filter(entity::payment::Column::EnrollmentId.eq(enrollment_id))
            .order_by_asc(entity::payment::Column::InstallmentNo)
            .all(self.db)
            .await?;

        Ok(payments.into_iter().map(Payment::from_entity).collect())
    }

    /// Hard-deletes a payment by id. Administrative path only; voiding is
    /// the regular way to cancel a payment.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Payment::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
