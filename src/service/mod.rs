//! Business logic orchestration between controllers and the data layer.

pub mod auth;
pub mod comment;
pub mod menu;
pub mod ranking;
pub mod vote;
