//! Question data repository for database operations.

use crate::server::model::question::{CreateQuestionParam, Question};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Repository providing database operations for practice questions.
pub struct QuestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionRepository<'a> {
    /// Creates a new QuestionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a question and returns it with the id assigned by the store.
    ///
    /// The difficulty is written as its string form, so labels outside the known set
    /// are stored unchanged.
    ///
    /// # Arguments
    /// - `param` - All six question fields
    ///
    /// # Returns
    /// - `Ok(Question)` - The created question including its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateQuestionParam) -> Result<Question, DbErr> {
        let entity = entity::question::ActiveModel {
            name: ActiveValue::Set(param.name),
            pattern: ActiveValue::Set(param.pattern),
            difficulty: ActiveValue::Set(param.difficulty.into()),
            last_completed_time: ActiveValue::Set(param.last_completed_time),
            next_due_time: ActiveValue::Set(param.next_due_time),
            notes: ActiveValue::Set(param.notes),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Question::from_entity(entity))
    }

    /// Gets all questions ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Question>)` - Every stored question (empty if none exist)
    /// - `Err(DbErr)` - Database error during query or row decoding
    pub async fn get_all(&self) -> Result<Vec<Question>, DbErr> {
        let entities = entity::prelude::Question::find()
            .order_by_asc(entity::question::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Question::from_entity).collect())
    }
}
