//! Domain models, operation parameters and API DTOs.

pub mod admin;
pub mod api;
pub mod comment;
pub mod menu;
pub mod vote;
