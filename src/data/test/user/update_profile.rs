use super::*;

/// Tests that omitted fields survive a partial profile update.
///
/// Verifies that only the provided fields change and everything absent from
/// the update keeps its stored value.
///
/// Expected: Ok(Some) with profile text set and username untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username(Some("keep_me".to_string()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams {
                profile_text: Patch::Value("Loves hiking".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.profile_text, Some("Loves hiking".to_string()));
    assert_eq!(updated.username, Some("keep_me".to_string()));
    assert_eq!(updated.first_name, user.first_name);

    Ok(())
}

/// Tests clearing nullable fields with an explicit null.
///
/// Verifies that `Patch::Null` writes NULL instead of leaving the column
/// unchanged.
///
/// Expected: Ok(Some) with last name and birth date cleared
#[tokio::test]
async fn clears_fields_on_explicit_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .last_name(Some("Wilson".to_string()))
        .birth_date(Some(NaiveDate::from_ymd_opt(1995, 3, 15).unwrap()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams {
                last_name: Patch::Null,
                birth_date: Patch::Null,
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.last_name, None);
    assert_eq!(updated.birth_date, None);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            Uuid::new_v4(),
            UpdateProfileParams {
                first_name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
