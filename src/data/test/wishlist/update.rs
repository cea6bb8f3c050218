use super::*;

/// Tests that omitted fields survive a partial wishlist update.
///
/// Expected: Ok(Some) with the title changed and description untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::WishlistFactory::new(db, user.id)
        .description(Some("keep this".to_string()))
        .build()
        .await?;

    let repo = WishlistRepository::new(db);
    let updated = repo
        .update(
            wishlist.id,
            UpdateWishlistParams {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.description, Some("keep this".to_string()));

    Ok(())
}

/// Tests clearing a nullable wishlist field with an explicit null.
///
/// Expected: Ok(Some) with the description cleared and emoji untouched
#[tokio::test]
async fn clears_description_on_explicit_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::WishlistFactory::new(db, user.id)
        .description(Some("to be removed".to_string()))
        .emoji(Some("🎁".to_string()))
        .build()
        .await?;

    let repo = WishlistRepository::new(db);
    let updated = repo
        .update(
            wishlist.id,
            UpdateWishlistParams {
                description: Patch::Null,
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.description, None);
    assert_eq!(updated.emoji, Some("🎁".to_string()));

    Ok(())
}

/// Tests updating a wishlist that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_wishlist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WishlistRepository::new(db);
    let updated = repo
        .update(
            Uuid::new_v4(),
            UpdateWishlistParams {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
