//! SeaORM entity models for the wishboard database schema.

pub mod prelude;

pub mod user;
pub mod user_friend;
pub mod wish;
pub mod wishlist;
