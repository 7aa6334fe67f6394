//! Server-side domain models and parameter types.
//!
//! Domain models used throughout the service layer, representing business
//! entities and operation parameters. Domain models are converted from
//! entity models at the repository boundary and transformed to DTOs at the
//! controller boundary, keeping business logic separate from database and
//! API concerns.

pub mod auth;
pub mod career;
pub mod enrollment;
pub mod news;
pub mod payment;
pub mod user;
