//! Mealboard Test Utils
//!
//! Shared testing utilities for building unit and integration tests for the
//! mealboard backend. Offers a builder pattern for creating test contexts with
//! in-memory SQLite databases plus entity factories with sensible defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::ProteinVote;
//!
//! #[tokio::test]
//! async fn test_vote_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(ProteinVote)
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
