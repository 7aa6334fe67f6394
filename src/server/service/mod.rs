//! Business logic layer.
//!
//! Services orchestrate repositories and enforce the business rules:
//! uniqueness checks, the billing invariants, and the transactional
//! boundaries around multi-step writes. Controllers call services and map
//! the returned domain models to DTOs.

pub mod auth;
pub mod billing;
pub mod career;
pub mod enrollment;
pub mod news;
pub mod user;

#[cfg(test)]
mod test;

use crate::server::error::AppError;

/// Rejects non-positive page parameters before they reach a repository.
pub(crate) fn validate_pagination(page: u64, page_size: u64) -> Result<(), AppError> {
    if page == 0 || page_size == 0 {
        return Err(AppError::Validation(
            "page and page_size must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
