//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .telegram_id(123456789)
///     .first_name("Alice")
///     .birth_date(Some(NaiveDate::from_ymd_opt(1995, 3, 15).unwrap()))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    telegram_id: i64,
    username: Option<String>,
    first_name: String,
    last_name: Option<String>,
    birth_date: Option<NaiveDate>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - telegram_id: auto-incremented unique value
    /// - username: `Some("user_{id}")`
    /// - first_name: `"User {id}"`
    /// - last_name: `None`
    /// - birth_date: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            telegram_id: id,
            username: Some(format!("user_{}", id)),
            first_name: format!("User {}", id),
            last_name: None,
            birth_date: None,
        }
    }

    /// Sets the Telegram ID for the user.
    pub fn telegram_id(mut self, telegram_id: i64) -> Self {
        self.telegram_id = telegram_id;
        self
    }

    /// Sets the username for the user.
    pub fn username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    /// Sets the first name for the user.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name for the user.
    pub fn last_name(mut self, last_name: Option<String>) -> Self {
        self.last_name = last_name;
        self
    }

    /// Sets the birth date for the user.
    pub fn birth_date(mut self, birth_date: Option<NaiveDate>) -> Self {
        self.birth_date = birth_date;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            telegram_id: ActiveValue::Set(self.telegram_id),
            username: ActiveValue::Set(self.username),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            avatar_url: ActiveValue::Set(None),
            profile_text: ActiveValue::Set(None),
            birth_date: ActiveValue::Set(self.birth_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific Telegram ID.
///
/// Shorthand for `UserFactory::new(db).telegram_id(telegram_id).build().await`.
pub async fn create_user_with_telegram_id(
    db: &DatabaseConnection,
    telegram_id: i64,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).telegram_id(telegram_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.telegram_id > 0);
        assert!(!user.first_name.is_empty());
        assert!(user.birth_date.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .telegram_id(123456789)
            .first_name("Alice")
            .last_name(Some("Wilson".to_string()))
            .build()
            .await?;

        assert_eq!(user.telegram_id, 123456789);
        assert_eq!(user.first_name, "Alice");
        assert_eq!(user.last_name, Some("Wilson".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.telegram_id, user2.telegram_id);
        assert_ne!(user1.id, user2.id);

        Ok(())
    }
}
