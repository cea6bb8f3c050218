use super::*;

/// Tests moving a booked wish into another wishlist.
///
/// Verifies that the move clears the booking state along the way.
///
/// Expected: Ok(Some) with the new wishlist id and no booking
#[tokio::test]
async fn moves_wish_and_clears_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let source = factory::wishlist::create_wishlist(db, owner.id).await?;
    let target = factory::wishlist::create_wishlist(db, owner.id).await?;
    let wish = factory::wish::WishFactory::new(db, source.id)
        .booked_by(booker.id)
        .build()
        .await?;

    let repo = WishRepository::new(db);
    let moved = repo.move_to_wishlist(wish.id, target.id).await?.unwrap();

    assert_eq!(moved.wishlist_id, target.id);
    assert!(!moved.is_booked);
    assert!(moved.booked_by_user_id.is_none());

    Ok(())
}

/// Tests moving a wish that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_wish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let target = factory::wishlist::create_wishlist(db, user.id).await?;

    let repo = WishRepository::new(db);
    let moved = repo.move_to_wishlist(Uuid::new_v4(), target.id).await?;

    assert!(moved.is_none());

    Ok(())
}
