//! Domain models and operation parameter types.
//!
//! Domain models sit between the entity layer (database rows) and the DTO
//! layer (API payloads). Conversions happen at the boundaries: repositories
//! produce domain models with `from_entity`, controllers serialize them with
//! `into_dto`.

pub mod patch;
pub mod user;
pub mod wish;
pub mod wishlist;
