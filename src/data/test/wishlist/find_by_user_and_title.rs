use super::*;

/// Tests looking up a wishlist by owner and exact title.
///
/// Expected: Ok(Some) for the owner, Ok(None) for another user with no such list
#[tokio::test]
async fn finds_by_exact_title_per_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let created = factory::wishlist::WishlistFactory::new(db, user.id)
        .title("Сбывшиеся мечты")
        .build()
        .await?;

    let repo = WishlistRepository::new(db);
    let found = repo.find_by_user_and_title(user.id, "Сбывшиеся мечты").await?;
    let not_found = repo
        .find_by_user_and_title(other.id, "Сбывшиеся мечты")
        .await?;

    assert_eq!(found.map(|w| w.id), Some(created.id));
    assert!(not_found.is_none());

    Ok(())
}
