//! HTTP request handlers for the public and admin API surfaces.

pub mod auth;
pub mod comment;
pub mod extract;
pub mod menu;
pub mod ranking;
pub mod vote;
