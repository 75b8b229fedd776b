use super::*;

/// Tests listing questions on an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_questions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let questions = QuestionRepository::new(db).get_all().await?;

    assert!(questions.is_empty());

    Ok(())
}

/// Tests that rows written outside the repository are decoded correctly.
///
/// Expected: Ok with known and unknown difficulties mapped to their variants
#[tokio::test]
async fn decodes_factory_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::question::QuestionFactory::new(db)
        .name("Valid Parentheses")
        .pattern("Stack")
        .difficulty("Easy")
        .build()
        .await?;
    factory::question::QuestionFactory::new(db)
        .name("Median of Two Sorted Arrays")
        .pattern("Binary Search")
        .difficulty("Nightmare")
        .build()
        .await?;

    let questions = QuestionRepository::new(db).get_all().await?;

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].name, "Valid Parentheses");
    assert_eq!(questions[0].difficulty, Difficulty::Easy);
    assert_eq!(questions[1].pattern, "Binary Search");
    assert_eq!(
        questions[1].difficulty,
        Difficulty::Other("Nightmare".to_string())
    );

    Ok(())
}

/// Tests that a created question is listed with identical fields.
///
/// Expected: Ok with the listing equal to the created question
#[tokio::test]
async fn lists_created_question() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);
    let created = repo.create(two_sum(Difficulty::Medium)).await?;

    let questions = repo.get_all().await?;

    assert_eq!(questions, vec![created]);

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err from the select
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = QuestionRepository::new(db).get_all().await;

    assert!(result.is_err());

    Ok(())
}
