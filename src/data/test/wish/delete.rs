use super::*;

/// Tests deleting a wish by id.
///
/// Expected: Ok(true) with the wish removed from the database
#[tokio::test]
async fn deletes_wish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let wishlist = factory::wishlist::create_wishlist(db, user.id).await?;
    let wish = factory::wish::create_wish(db, wishlist.id).await?;

    let repo = WishRepository::new(db);
    let deleted = repo.delete(wish.id).await?;

    assert!(deleted);
    let db_wish = entity::prelude::Wish::find_by_id(wish.id).one(db).await?;
    assert!(db_wish.is_none());

    Ok(())
}

/// Tests deleting a wish that does not exist.
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

    let repo = WishRepository::new(db);
    let deleted = repo.delete(Uuid::new_v4()).await?;

    assert!(!deleted);

    Ok(())
}
