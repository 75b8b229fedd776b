use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the user and returns the id assigned
/// by the store alongside the submitted name.
///
/// Expected: Ok with a positive id and the given name
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Alice".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Alice");

    Ok(())
}

/// Tests that names are not required to be unique.
///
/// Expected: Ok with two distinct ids for the same name
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .create(CreateUserParam {
            name: "Alice".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateUserParam {
            name: "Alice".to_string(),
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that an empty name is stored as-is.
///
/// Expected: Ok with an empty name and an assigned id
#[tokio::test]
async fn accepts_empty_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParam {
            name: String::new(),
        })
        .await?;

    assert!(user.id > 0);
    assert!(user.name.is_empty());

    Ok(())
}

/// Tests that concurrent inserts each receive their own id.
///
/// Expected: Ok with every id distinct and every user listed afterwards
#[tokio::test]
async fn concurrent_creates_receive_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let db = db.clone();
            tokio::spawn(async move {
                UserRepository::new(&db)
                    .create(CreateUserParam {
                        name: format!("Concurrent {}", i),
                    })
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap()?.id);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);

    let users = UserRepository::new(db).get_all().await?;
    assert_eq!(users.len(), 8);
    for i in 0..8 {
        let name = format!("Concurrent {}", i);
        assert!(users.iter().any(|u| u.name == name));
    }

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err from the insert
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            name: "Alice".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
