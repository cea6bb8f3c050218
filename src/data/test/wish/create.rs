use super::*;

/// Tests creating a wish with full detail fields.
///
/// Verifies that the wish starts unbooked regardless of input.
///
/// Expected: Ok with all fields stored and booking state empty
#[tokio::test]
async fn creates_unbooked_wish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::create_wishlist(db, user.id).await?;

    let repo = WishRepository::new(db);
    let result = repo
        .create(CreateWishParams {
            wishlist_id: wishlist.id,
            title: "Mechanical keyboard".to_string(),
            subtitle: Some("75% layout".to_string()),
            description: None,
            link: Some("https://example.com/kb".to_string()),
            image_url: None,
            price: Some(149.99),
            currency: Some("EUR".to_string()),
            priority: WishPriority::ReallyWant,
        })
        .await;

    assert!(result.is_ok());
    let wish = result.unwrap();
    assert_eq!(wish.wishlist_id, wishlist.id);
    assert_eq!(wish.title, "Mechanical keyboard");
    assert_eq!(wish.price, Some(149.99));
    assert_eq!(wish.priority, WishPriority::ReallyWant);
    assert!(!wish.is_booked);
    assert!(wish.booked_by_user_id.is_none());

    Ok(())
}
