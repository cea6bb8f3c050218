use super::*;

/// Tests that omitted fields survive a partial wish update.
///
/// Expected: Ok(Some) with the price changed and title untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::create_wishlist(db, user.id).await?;
    let wish = factory::wish::WishFactory::new(db, wishlist.id)
        .title("Headphones")
        .price(Some(200.0), Some("USD".to_string()))
        .build()
        .await?;

    let repo = WishRepository::new(db);
    let updated = repo
        .update(
            wish.id,
            UpdateWishParams {
                price: Patch::Value(180.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, Some(180.0));
    assert_eq!(updated.currency, Some("USD".to_string()));
    assert_eq!(updated.title, "Headphones");

    Ok(())
}

/// Tests clearing nullable wish fields with explicit nulls.
///
/// Expected: Ok(Some) with price and currency cleared
#[tokio::test]
async fn clears_fields_on_explicit_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::create_wishlist(db, user.id).await?;
    let wish = factory::wish::WishFactory::new(db, wishlist.id)
        .price(Some(50.0), Some("USD".to_string()))
        .build()
        .await?;

    let repo = WishRepository::new(db);
    let updated = repo
        .update(
            wish.id,
            UpdateWishParams {
                price: Patch::Null,
                currency: Patch::Null,
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, None);
    assert_eq!(updated.currency, None);

    Ok(())
}

/// Tests that the generic update leaves booking state alone.
///
/// Expected: Ok(Some) with the booking untouched after a title change
#[tokio::test]
async fn does_not_touch_booking_state() -> Result<(), DbErr> {
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
    let updated = repo
        .update(
            wish.id,
            UpdateWishParams {
                title: Some("Still booked".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.is_booked);
    assert_eq!(updated.booked_by_user_id, Some(booker.id));

    Ok(())
}

/// Tests updating a wish that does not exist.
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

    let repo = WishRepository::new(db);
    let updated = repo
        .update(
            Uuid::new_v4(),
            UpdateWishParams {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
