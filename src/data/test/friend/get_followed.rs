use super::*;

/// Tests listing the users someone follows.
///
/// Verifies that only followees of the given user are returned, not users
/// followed by others.
///
/// Expected: Ok with exactly the two followed users
#[tokio::test]
async fn returns_only_followed_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user(db).await?;
    let friend_a = factory::user::create_user(db).await?;
    let friend_b = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let repo = FriendRepository::new(db);
    repo.subscribe(follower.id, friend_a.id).await?;
    repo.subscribe(follower.id, friend_b.id).await?;
    repo.subscribe(stranger.id, follower.id).await?;

    let followed = repo.get_followed(follower.id).await?;

    assert_eq!(followed.len(), 2);
    let ids: Vec<_> = followed.iter().map(|u| u.id).collect();
    assert!(ids.contains(&friend_a.id));
    assert!(ids.contains(&friend_b.id));
    assert!(!ids.contains(&stranger.id));

    Ok(())
}

/// Tests listing followees for a user who follows nobody.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_no_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_wishlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = FriendRepository::new(db);
    let followed = repo.get_followed(user.id).await?;

    assert!(followed.is_empty());

    Ok(())
}
