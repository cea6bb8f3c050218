use super::*;

/// Tests substring matching across username and name columns.
///
/// Verifies that the query matches any of the three columns and leaves
/// non-matching users out.
///
/// Expected: Ok with only the matching user returned
#[tokio::test]
async fn matches_username_and_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let acting = factory::user::create_user(db).await?;
    let alice = factory::user::UserFactory::new(db)
        .username(Some("alice_w".to_string()))
        .first_name("Alice")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username(Some("bob_k".to_string()))
        .first_name("Bob")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let results = repo
        .search(SearchUsersParams {
            query: "alice".to_string(),
            exclude_user_id: acting.id,
        })
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, alice.id);

    Ok(())
}

/// Tests that the acting user never appears in their own search results.
///
/// Expected: Ok with an empty result even though the query matches the acting user
#[tokio::test]
async fn excludes_acting_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let acting = factory::user::UserFactory::new(db)
        .username(Some("selfsearch".to_string()))
        .first_name("Selfy")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let results = repo
        .search(SearchUsersParams {
            query: "selfsearch".to_string(),
            exclude_user_id: acting.id,
        })
        .await?;

    assert!(results.is_empty());

    Ok(())
}
