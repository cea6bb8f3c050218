use super::*;

/// Tests releasing a booking held by the caller.
///
/// Expected: Ok(true) with the booking columns cleared
#[tokio::test]
async fn releases_own_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::create_wishlist(db, owner.id).await?;
    let wish = factory::wish::WishFactory::new(db, wishlist.id)
        .booked_by(booker.id)
        .build()
        .await?;

    let repo = WishRepository::new(db);
    let released = repo.unbook(wish.id, booker.id).await?;

    assert!(released);
    let db_wish = entity::prelude::Wish::find_by_id(wish.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!db_wish.is_booked);
    assert!(db_wish.booked_by_user_id.is_none());

    Ok(())
}

/// Tests that a user cannot release somebody else's booking.
///
/// Expected: Ok(false) with the booking intact
#[tokio::test]
async fn rejects_release_by_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::create_wishlist(db, owner.id).await?;
    let wish = factory::wish::WishFactory::new(db, wishlist.id)
        .booked_by(booker.id)
        .build()
        .await?;

    let repo = WishRepository::new(db);
    let released = repo.unbook(wish.id, other.id).await?;

    assert!(!released);
    let db_wish = entity::prelude::Wish::find_by_id(wish.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_wish.is_booked);
    assert_eq!(db_wish.booked_by_user_id, Some(booker.id));

    Ok(())
}

/// Tests releasing a wish that is not booked.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unbooked_wish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::create_wishlist(db, owner.id).await?;
    let wish = factory::wish::create_wish(db, wishlist.id).await?;

    let repo = WishRepository::new(db);
    let released = repo.unbook(wish.id, owner.id).await?;

    assert!(!released);

    Ok(())
}
