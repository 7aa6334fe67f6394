use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        career::CareerRepository, enrollment::EnrollmentRepository, payment::PaymentRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        career::Career,
        enrollment::{Enrollment, EnrollmentWithCareer},
    },
    service::validate_pagination,
};

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a user in a career.
    ///
    /// The user is resolved to their profile row first; an account
    /// without a profile cannot be enrolled. A profile enrolls in a given
    /// career at most once.
    ///
    /// # Returns
    /// - `Ok((Enrollment, Career))`: The created enrollment and its career
    /// - `Err(AppError::Validation)`: Non-positive ids or missing profile
    /// - `Err(AppError::NotFound)`: Career does not exist
    /// - `Err(AppError::Conflict)`: Already enrolled in that career
    pub async fn create(
        &self,
        user_id: i32,
        career_id: i32,
    ) -> Result<(Enrollment, Career), AppError> {
        if user_id <= 0 || career_id <= 0 {
            return Err(AppError::Validation(
                "Ids must be greater than 0".to_string(),
            ));
        }

        let profile = UserRepository::new(self.db)
            .find_profile_by_user(user_id)
            .await?
            .ok_or_else(|| {
                AppError::Validation(
                    "The user has no profile and cannot be enrolled".to_string(),
                )
            })?;

        let txn = self.db.begin().await?;

        let career = CareerRepository::new(&txn)
            .find_by_id(career_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Career not found".to_string()))?;

        let existing = EnrollmentRepository::new(&txn)
            .find_by_profile_and_career(profile.id, career_id)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(
                "The student is already enrolled in that career".to_string(),
            ));
        }

        let enrollment = EnrollmentRepository::new(&txn)
            .create(profile.id, career_id)
            .await?;

        txn.commit().await?;

        Ok((enrollment, career))
    }

    /// Gets a page of a user's enrollments joined with their careers.
    ///
    /// A user without a profile has no enrollments; the page comes back
    /// empty rather than failing.
    pub async fn get_paginated_by_user(
        &self,
        user_id: i32,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<EnrollmentWithCareer>, u64), AppError> {
        if user_id <= 0 {
            return Err(AppError::Validation(
                "user_id must be greater than 0".to_string(),
            ));
        }
        validate_pagination(page, page_size)?;

        let Some(profile) = UserRepository::new(self.db)
            .find_profile_by_user(user_id)
            .await?
        else {
            return Ok((Vec::new(), 0));
        };

        let (rows, total) = EnrollmentRepository::new(self.db)
            .get_paginated_by_profile(profile.id, page, page_size)
            .await?;

        Ok((rows, total))
    }

    /// Deletes an enrollment.
    ///
    /// Refused while any payment rows exist for it, voided ones included:
    /// the payment ledger is the audit trail and deleting the enrollment
    /// would orphan it.
    ///
    /// # Returns
    /// - `Ok(())`: Enrollment deleted
    /// - `Err(AppError::NotFound)`: Enrollment does not exist
    /// - `Err(AppError::Conflict)`: Enrollment has payments
    pub async fn delete(&self, enrollment_id: i32) -> Result<(), AppError> {
        let repo = EnrollmentRepository::new(self.db);

        let enrollment = repo
            .find_by_id(enrollment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        let payments = PaymentRepository::new(self.db)
            .count_by_enrollment(enrollment.id)
            .await?;
        if payments > 0 {
            return Err(AppError::Conflict(
                "Cannot delete an enrollment with associated payments".to_string(),
            ));
        }

        repo.delete(enrollment_id).await?;

        Ok(())
    }
}
