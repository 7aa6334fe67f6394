//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each domain.
//! Repositories use SeaORM entity models internally and return domain
//! models to keep the data layer separate from the business logic layer.
//! Every repository is generic over `ConnectionTrait`, so the same methods
//! run against the shared pool or inside a transaction handle.

pub mod career;
pub mod enrollment;
pub mod news;
pub mod payment;
pub mod price_history;
pub mod user;

#[cfg(test)]
mod test;
