use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    career::Career,
    enrollment::{Enrollment, EnrollmentWithCareer},
};

pub struct EnrollmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an enrollment linking a student profile to a career.
    ///
    /// # Returns
    /// - `Ok(Enrollment)`: The created enrollment
    /// - `Err(DbErr)`: Database error, including the unique-pair index
    pub async fn create(&self, user_detail_id: i32, career_id: i32) -> Result<Enrollment, DbErr> {
        let enrollment = entity::enrollment::ActiveModel {
            user_detail_id: ActiveValue::Set(user_detail_id),
            career_id: ActiveValue::Set(career_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Enrollment::from_entity(enrollment))
    }

    /// Gets an enrollment by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Enrollment>, DbErr> {
        let enrollment = entity::prelude::Enrollment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(enrollment.map(Enrollment::from_entity))
    }

    /// Finds the enrollment of a profile in a career, if any.
    ///
    /// Backs the duplicate-enrollment check.
    pub async fn find_by_profile_and_career(
        &self,
        user_detail_id: i32,
        career_id: i32,
    ) -> Result<Option<Enrollment>, DbErr> {
        let enrollment = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserDetailId.eq(user_detail_id))
            .filter(entity::enrollment::Column::CareerId.eq(career_id))
            .one(self.db)
            .await?;

        Ok(enrollment.map(Enrollment::from_entity))
    }

    /// Gets a page of a profile's enrollments joined with their careers,
    /// ordered by enrollment id.
    ///
    /// # Arguments
    /// - `user_detail_id`: Profile whose enrollments to list
    /// - `page`: Page number (1-indexed)
    /// - `page_size`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((rows, total))`: Page of enrollment/career pairs and total
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated_by_profile(
        &self,
        user_detail_id: i32,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<EnrollmentWithCareer>, u64), DbErr> {
        let query = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserDetailId.eq(user_detail_id))
            .find_also_related(entity::prelude::Career)
            .order_by_asc(entity::enrollment::Column::Id);

        let paginator = query.paginate(self.db, page_size);
        let total_items = paginator.num_items().await?;
        let rows = paginator.fetch_page(page - 1).await?;

        let rows = rows
            .into_iter()
            .filter_map(|(enrollment, career)| {
                career.map(|career| EnrollmentWithCareer {
                    enrollment: Enrollment::from_entity(enrollment),
                    career: Career::from_entity(career),
                })
            })
            .collect();

        Ok((rows, total_items))
    }

    /// Lists a profile's enrollments with careers, optionally narrowed to
    /// one career or one enrollment. Used by the student self-service
    /// payment view.
    pub async fn list_by_profile(
        &self,
        user_detail_id: i32,
        career_id: Option<i32>,
        enrollment_id: Option<i32>,
    ) -> Result<Vec<EnrollmentWithCareer>, DbErr> {
        let mut query = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserDetailId.eq(user_detail_id));

        if let Some(career_id) = career_id {
            query = query.filter(entity::enrollment::Column::CareerId.eq(career_id));
        }
        if let Some(enrollment_id) = enrollment_id {
            query = query.filter(entity::enrollment::Column::Id.eq(enrollment_id));
        }

        let rows = query
            .find_also_related(entity::prelude::Career)
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(enrollment, career)| {
                career.map(|career| EnrollmentWithCareer {
                    enrollment: Enrollment::from_entity(enrollment),
                    career: Career::from_entity(career),
                })
            })
            .collect())
    }

    /// Deletes an enrollment by id.
    ///
    /// The caller enforces the zero-payments guard first.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Enrollment::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
