use super::*;

/// Tests booking an unbooked wish.
///
/// Expected: Ok(true) with the booking columns set
#[tokio::test]
async fn books_unbooked_wish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::create_wishlist(db, owner.id).await?;
    let wish = factory::wish::create_wish(db, wishlist.id).await?;

    let repo = WishRepository::new(db);
    let booked = repo.book(wish.id, booker.id).await?;

    assert!(booked);
    let db_wish = entity::prelude::Wish::find_by_id(wish.id)
        .one(db)
        .await?
        .unwrap();
    assert!(db_wish.is_booked);
    assert_eq!(db_wish.booked_by_user_id, Some(booker.id));

    Ok(())
}

/// Tests booking a wish that is already booked by someone else.
///
/// Verifies that the conditional update matches zero rows and the original
/// booker keeps the wish.
///
/// Expected: Ok(false) with the first booker unchanged
#[tokio::test]
async fn already_booked_wish_keeps_first_booker() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::create_wishlist(db, owner.id).await?;
    let wish = factory::wish::WishFactory::new(db, wishlist.id)
        .booked_by(first.id)
        .build()
        .await?;

    let repo = WishRepository::new(db);
    let booked = repo.book(wish.id, second.id).await?;

    assert!(!booked);
    let db_wish = entity::prelude::Wish::find_by_id(wish.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_wish.booked_by_user_id, Some(first.id));

    Ok(())
}

/// Tests booking a wish that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_wish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booker = factory::user::create_user(db).await?;

    let repo = WishRepository::new(db);
    let booked = repo.book(Uuid::new_v4(), booker.id).await?;

    assert!(!booked);

    Ok(())
}
