use super::*;

/// Tests creating a new user via the registration upsert.
///
/// Verifies that the repository inserts a new user record with the provided
/// Telegram identity and profile fields.
///
/// Expected: Ok with a new user carrying all provided fields
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .upsert(RegisterUserParams {
            telegram_id: 123456789,
            username: Some("alice_w".to_string()),
            first_name: "Alice".to_string(),
            last_name: Some("Wilson".to_string()),
            avatar_url: None,
            birth_date: Some(NaiveDate::from_ymd_opt(1995, 3, 15).unwrap()),
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.telegram_id, 123456789);
    assert_eq!(user.username, Some("alice_w".to_string()));
    assert_eq!(user.first_name, "Alice");
    assert_eq!(user.birth_date, NaiveDate::from_ymd_opt(1995, 3, 15));

    Ok(())
}

/// Tests re-registering an existing user.
///
/// Verifies that upserting with a known Telegram id updates the profile fields
/// taken from Telegram while keeping the internal id stable.
///
/// Expected: Ok with updated name and the original internal id
#[tokio::test]
async fn updates_existing_user_keeps_internal_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user_with_telegram_id(db, 555).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(RegisterUserParams {
            telegram_id: 555,
            username: Some("renamed".to_string()),
            first_name: "Renamed".to_string(),
            last_name: None,
            avatar_url: None,
            birth_date: None,
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.first_name, "Renamed");
    assert_eq!(user.username, Some("renamed".to_string()));

    Ok(())
}

/// Tests that re-registration without a birth date preserves the stored one.
///
/// Verifies that the birth date column is excluded from the conflict update
/// when the registration carries no birth date.
///
/// Expected: Ok with the original birth date still present
#[tokio::test]
async fn preserves_birth_date_when_not_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let birth_date = NaiveDate::from_ymd_opt(1990, 7, 1).unwrap();
    factory::user::UserFactory::new(db)
        .telegram_id(777)
        .birth_date(Some(birth_date))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(RegisterUserParams {
            telegram_id: 777,
            username: None,
            first_name: "NoDate".to_string(),
            last_name: None,
            avatar_url: None,
            birth_date: None,
        })
        .await?;

    assert_eq!(user.birth_date, Some(birth_date));

    Ok(())
}
