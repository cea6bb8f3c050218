use super::*;

/// Tests deleting a wishlist and its wishes.
///
/// Verifies that the delete cascades to wishes through the foreign key.
///
/// Expected: Ok(true) with the contained wish gone
#[tokio::test]
async fn deletes_wishlist_and_cascades_wishes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::create_wishlist(db, user.id).await?;
    let wish = factory::wish::create_wish(db, wishlist.id).await?;

    let repo = WishlistRepository::new(db);
    let deleted = repo.delete(wishlist.id).await?;

    assert!(deleted);
    let db_wish = entity::prelude::Wish::find_by_id(wish.id).one(db).await?;
    assert!(db_wish.is_none());

    Ok(())
}

/// Tests deleting a wishlist that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_wishlist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WishlistRepository::new(db);
    let deleted = repo.delete(Uuid::new_v4()).await?;

    assert!(!deleted);

    Ok(())
}
