//! Entity factories for creating test data with sensible defaults.

pub mod helpers;
pub mod user;
pub mod wish;
pub mod wishlist;
