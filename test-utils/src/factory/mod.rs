//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories insert at the entity level so tests can set up any
//! stored state, including strings the application would never write itself.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let menu = factory::menu_day::create_menu_day(&db, date).await?;
//!
//! // Customize through the builder
//! let vote = factory::protein_vote::ProteinVoteFactory::new(&db)
//!     .date(date)
//!     .meal("dinner")
//!     .protein_key("vegetarian")
//!     .polarity("dislike")
//!     .build()
//!     .await?;
//! ```

pub mod admin;
pub mod comment;
pub mod helpers;
pub mod menu_day;
pub mod protein_vote;

// Re-export commonly used factory functions for concise usage
pub use comment::create_comment;
pub use menu_day::create_menu_day;
pub use protein_vote::create_like;
