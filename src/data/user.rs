//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles the registration upsert, profile updates, and lookup queries with proper
//! conversion between entity models and domain models at the infrastructure boundary.

use crate::model::user::{RegisterUserParams, SearchUsersParams, UpdateProfileParams, User};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user keyed by Telegram id.
    ///
    /// Inserts a new user or updates an existing user's profile fields taken from
    /// Telegram. The birth date is only updated when explicitly provided (Some value),
    /// preventing accidental clearing of a stored birth date during re-registration.
    ///
    /// # Arguments
    /// - `param` - Registration parameters including telegram_id and profile fields
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: RegisterUserParams) -> Result<User, DbErr> {
        // Build list of columns to update on conflict
        let mut update_columns = vec![
            entity::user::Column::Username,
            entity::user::Column::FirstName,
            entity::user::Column::LastName,
            entity::user::Column::AvatarUrl,
            entity::user::Column::UpdatedAt,
        ];

        // Only update birth_date column if a value was provided
        if param.birth_date.is_some() {
            update_columns.push(entity::user::Column::BirthDate);
        }

        let now = Utc::now();
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            telegram_id: ActiveValue::Set(param.telegram_id),
            username: ActiveValue::Set(param.username),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            avatar_url: ActiveValue::Set(param.avatar_url),
            birth_date: ActiveValue::Set(param.birth_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::TelegramId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their internal id.
    ///
    /// # Arguments
    /// - `id` - Internal user id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user found with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their Telegram id.
    ///
    /// # Arguments
    /// - `telegram_id` - Telegram user id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user found with that Telegram id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_telegram_id(&self, telegram_id: i64) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::TelegramId.eq(telegram_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Applies a tri-state partial update to a user's profile.
    ///
    /// Omitted fields stay unchanged, explicit nulls clear nullable columns, and
    /// provided values overwrite. The updated_at timestamp is always refreshed.
    ///
    /// # Arguments
    /// - `id` - Internal id of the user to update
    /// - `param` - Tri-state profile update parameters
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user found with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: Uuid,
        param: UpdateProfileParams,
    ) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(first_name) = param.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        param.username.apply(&mut active.username);
        param.last_name.apply(&mut active.last_name);
        param.avatar_url.apply(&mut active.avatar_url);
        param.profile_text.apply(&mut active.profile_text);
        param.birth_date.apply(&mut active.birth_date);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Searches users by username, first name, or last name.
    ///
    /// Performs a substring match against the three name columns and excludes the
    /// acting user from the results. Results are ordered alphabetically by first name.
    ///
    /// # Arguments
    /// - `param` - Search parameters with the query string and acting user id
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching users (empty if nothing matched)
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, param: SearchUsersParams) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.contains(&param.query))
                    .add(entity::user::Column::FirstName.contains(&param.query))
                    .add(entity::user::Column::LastName.contains(&param.query)),
            )
            .filter(entity::user::Column::Id.ne(param.exclude_user_id))
            .order_by_asc(entity::user::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
