//! User domain models and parameters.
//!
//! Provides the domain model for registered users plus parameter types for
//! the idempotent registration upsert and tri-state profile updates.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{dto::user::UserDto, model::patch::Patch};

/// A registered user with Telegram identity and profile data.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Internal id, generated at registration time.
    pub id: Uuid,
    /// Telegram user id; unique, the registration upsert key.
    pub telegram_id: i64,
    /// Telegram username, without the leading `@`.
    pub username: Option<String>,
    /// Display first name.
    pub first_name: String,
    /// Display last name.
    pub last_name: Option<String>,
    /// URL of the profile photo, if the bot could resolve one.
    pub avatar_url: Option<String>,
    /// Free-form profile/status text.
    pub profile_text: Option<String>,
    /// Birth date used for friend ordering; optional.
    pub birth_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            telegram_id: entity.telegram_id,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            avatar_url: entity.avatar_url,
            profile_text: entity.profile_text,
            birth_date: entity.birth_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            telegram_id: self.telegram_id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            avatar_url: self.avatar_url,
            profile_text: self.profile_text,
            birth_date: self.birth_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for the idempotent registration upsert.
///
/// Creates a new user when the telegram id is unknown, otherwise updates the
/// mutable profile fields with the values provided here. Identity fields and
/// the default wishlist are never touched on the update path.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Result of a registration call: the user plus whether it was created.
#[derive(Debug, Clone)]
pub struct RegisteredUser {
    pub user: User,
    pub is_new_user: bool,
}

/// Parameters for a tri-state partial profile update.
///
/// `Option` fields are non-nullable columns (omitted means unchanged);
/// `Patch` fields additionally distinguish explicit `null` (clear) from
/// omission.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub first_name: Option<String>,
    pub username: Patch<String>,
    pub last_name: Patch<String>,
    pub avatar_url: Patch<String>,
    pub profile_text: Patch<String>,
    pub birth_date: Patch<NaiveDate>,
}

impl UpdateProfileParams {
    /// Returns true when no field in the request would change anything.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.username.is_absent()
            && self.last_name.is_absent()
            && self.avatar_url.is_absent()
            && self.profile_text.is_absent()
            && self.birth_date.is_absent()
    }
}

/// Parameters for searching users by name or username.
#[derive(Debug, Clone)]
pub struct SearchUsersParams {
    /// Substring matched case-insensitively against username and names.
    pub query: String,
    /// The acting user, excluded from the results.
    pub exclude_user_id: Uuid,
}
