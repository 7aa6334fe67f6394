//! Campus Test Utils
//!
//! Shared testing utilities for the campus backend. Provides a builder for
//! test contexts backed by in-memory SQLite databases, plus per-entity
//! factories that insert rows with sensible defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Career;
//!
//! #[tokio::test]
//! async fn test_career_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Career)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
