use super::*;

/// Tests creating a wishlist with all fields set.
///
/// Expected: Ok with the created wishlist carrying every field
#[tokio::test]
async fn creates_wishlist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = WishlistRepository::new(db);
    let result = repo
        .create(CreateWishlistParams {
            user_id: user.id,
            title: "Birthday".to_string(),
            description: Some("Things I want this year".to_string()),
            is_public: true,
            is_default: false,
            emoji: Some("🎂".to_string()),
            event_date: None,
        })
        .await;

    assert!(result.is_ok());
    let wishlist = result.unwrap();
    assert_eq!(wishlist.user_id, user.id);
    assert_eq!(wishlist.title, "Birthday");
    assert_eq!(wishlist.emoji, Some("🎂".to_string()));
    assert!(wishlist.is_public);
    assert!(!wishlist.is_default);

    // Verify wishlist exists in database
    let db_wishlist = entity::prelude::Wishlist::find_by_id(wishlist.id)
        .one(db)
        .await?;
    assert!(db_wishlist.is_some());

    Ok(())
}
