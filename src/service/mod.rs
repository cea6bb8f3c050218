//! Business logic layer.
//!
//! Services sit between controllers and repositories: they resolve the acting
//! user, enforce ownership and visibility rules, and translate repository
//! results into domain errors. Controllers never talk to repositories directly.

pub mod birthday;
pub mod friend;
pub mod user;
pub mod wish;
pub mod wishlist;


use sea_orm::DatabaseConnection;

use crate::{data::user::UserRepository, error::AppError, model::user::User};

/// Resolves the acting user from the Telegram id carried by the request.
///
/// Every authenticated operation starts here; an unknown Telegram id means the
/// caller never went through registration.
pub(crate) async fn require_user_by_telegram_id(
    db: &DatabaseConnection,
    telegram_id: i64,
) -> Result<User, AppError> {
    UserRepository::new(db)
        .find_by_telegram_id(telegram_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
