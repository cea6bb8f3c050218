use super::*;

/// Tests creating a new follow edge.
///
/// Expected: Ok(true) for a fresh edge
#[tokio::test]
async fn creates_new_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user(db).await?;
    let followee = factory::user::create_user(db).await?;

    let repo = FriendRepository::new(db);
    let created = repo.subscribe(follower.id, followee.id).await?;

    assert!(created);

    Ok(())
}

/// Tests that subscribing twice is idempotent.
///
/// Verifies that the second insert hits the conflict path and reports that no
/// new edge was created.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn repeated_subscribe_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user(db).await?;
    let followee = factory::user::create_user(db).await?;

    let repo = FriendRepository::new(db);
    let first = repo.subscribe(follower.id, followee.id).await?;
    let second = repo.subscribe(follower.id, followee.id).await?;

    assert!(first);
    assert!(!second);

    Ok(())
}
