//! SeaORM entity definitions for the campus database schema.

pub mod career;
pub mod career_price;
pub mod enrollment;
pub mod news;
pub mod payment;
pub mod user;
pub mod user_detail;

pub mod prelude;
