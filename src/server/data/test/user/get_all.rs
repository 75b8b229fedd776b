use super::*;

/// Tests listing users on an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests listing users in insertion order.
///
/// Expected: Ok with users ordered by ascending id
#[tokio::test]
async fn returns_users_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::UserFactory::new(db).name("Zed").build().await?;
    let second = factory::user::UserFactory::new(db).name("Amy").build().await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, first.id);
    assert_eq!(users[0].name, "Zed");
    assert_eq!(users[1].id, second.id);
    assert_eq!(users[1].name, "Amy");

    Ok(())
}

/// Tests that a created user is visible in the listing.
///
/// Expected: Ok with the created user present, id and name matching
#[tokio::test]
async fn lists_created_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParam {
            name: "Alice".to_string(),
        })
        .await?;

    let users = repo.get_all().await?;

    assert_eq!(users, vec![created]);

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err from the select
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).get_all().await;

    assert!(result.is_err());

    Ok(())
}
