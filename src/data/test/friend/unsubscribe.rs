use super::*;

/// Tests removing an existing follow edge.
///
/// Expected: Ok(true) and the edge no longer reported as subscribed
#[tokio::test]
async fn removes_existing_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user(db).await?;
    let followee = factory::user::create_user(db).await?;

    let repo = FriendRepository::new(db);
    repo.subscribe(follower.id, followee.id).await?;

    let removed = repo.unsubscribe(follower.id, followee.id).await?;

    assert!(removed);
    assert!(!repo.is_subscribed(follower.id, followee.id).await?);

    Ok(())
}

/// Tests unsubscribing when no edge exists.
///
/// Expected: Ok(false), nothing to remove
#[tokio::test]
async fn missing_edge_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user(db).await?;
    let followee = factory::user::create_user(db).await?;

    let repo = FriendRepository::new(db);
    let removed = repo.unsubscribe(follower.id, followee.id).await?;

    assert!(!removed);

    Ok(())
}
