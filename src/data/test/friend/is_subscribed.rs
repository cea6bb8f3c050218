use super::*;

/// Tests that an existing edge is reported as subscribed.
///
/// Expected: Ok(true) after subscribing
#[tokio::test]
async fn reports_existing_edge() -> Result<(), DbErr> {
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

    assert!(repo.is_subscribed(follower.id, followee.id).await?);

    Ok(())
}

/// Tests that the follow edge is directed.
///
/// Verifies that subscribing one way does not create the reverse edge.
///
/// Expected: Ok(false) for the reverse direction
#[tokio::test]
async fn edge_is_directed() -> Result<(), DbErr> {
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

    assert!(!repo.is_subscribed(followee.id, follower.id).await?);

    Ok(())
}
