//! HTTP request handlers.
//!
//! Controllers translate between the HTTP layer and services: they extract the
//! acting user's Telegram id, convert DTOs to domain parameters, call the
//! matching service, and convert results back to DTOs.

pub mod user;
pub mod wish;
pub mod wishlist;
