//! API data transfer objects.
//!
//! Request and response bodies for the HTTP API, with serde for wire format
//! and utoipa schemas for the generated OpenAPI document.

pub mod api;
pub mod user;
pub mod wish;
pub mod wishlist;
