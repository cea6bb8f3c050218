use super::*;

/// Tests that a user's wishlists are returned oldest first.
///
/// Expected: Ok with both wishlists in creation order
#[tokio::test]
async fn returns_user_wishlists_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let first = factory::wishlist::create_default_wishlist(db, user.id).await?;
    let second = factory::wishlist::create_wishlist(db, user.id).await?;
    factory::wishlist::create_wishlist(db, other.id).await?;

    let repo = WishlistRepository::new(db);
    let wishlists = repo.find_by_user_id(user.id).await?;

    assert_eq!(wishlists.len(), 2);
    assert_eq!(wishlists[0].id, first.id);
    assert_eq!(wishlists[1].id, second.id);

    Ok(())
}
