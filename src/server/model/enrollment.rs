//! Domain models for enrollments.

use crate::server::model::career::Career;

/// Registration of a student profile in a career.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: i32,
    pub user_detail_id: i32,
    pub career_id: i32,
}

impl Enrollment {
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            user_detail_id: entity.user_detail_id,
            career_id: entity.career_id,
        }
    }
}

/// Enrollment joined with the career it points at, for listings.
#[derive(Debug, Clone)]
pub struct EnrollmentWithCareer {
    pub enrollment: Enrollment,
    pub career: Career,
}
