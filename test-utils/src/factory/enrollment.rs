//! Enrollment factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an enrollment linking a student profile to a career.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_detail_id` - Profile row of the student being enrolled
/// - `career_id` - Career the student enrolls in
pub async fn create_enrollment(
    db: &DatabaseConnection,
    user_detail_id: i32,
    career_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    entity::enrollment::ActiveModel {
        id: ActiveValue::NotSet,
        user_detail_id: ActiveValue::Set(user_detail_id),
        career_id: ActiveValue::Set(career_id),
    }
    .insert(db)
    .await
}
