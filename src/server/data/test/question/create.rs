use super::*;
use sea_orm::EntityTrait;

/// Tests creating a new question.
///
/// Verifies that every submitted field is returned unchanged together with
/// the id assigned by the store.
///
/// Expected: Ok with a positive id and all six fields round-tripped
#[tokio::test]
async fn creates_new_question() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = two_sum(Difficulty::Easy);
    let question = QuestionRepository::new(db).create(param.clone()).await?;

    assert!(question.id > 0);
    assert_eq!(question.name, param.name);
    assert_eq!(question.pattern, param.pattern);
    assert_eq!(question.difficulty, Difficulty::Easy);
    assert_eq!(question.last_completed_time, param.last_completed_time);
    assert_eq!(question.next_due_time, param.next_due_time);
    assert_eq!(question.notes, param.notes);

    Ok(())
}

/// Tests that an unknown difficulty label is stored verbatim.
///
/// Expected: Ok with the raw string persisted in the row
#[tokio::test]
async fn persists_unknown_difficulty_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let question = QuestionRepository::new(db)
        .create(two_sum(Difficulty::Other("Extreme".to_string())))
        .await?;

    let row = entity::prelude::Question::find_by_id(question.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.difficulty, "Extreme");
    assert_eq!(
        question.difficulty,
        Difficulty::Other("Extreme".to_string())
    );

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err from the insert
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = QuestionRepository::new(db)
        .create(two_sum(Difficulty::Hard))
        .await;

    assert!(result.is_err());

    Ok(())
}
