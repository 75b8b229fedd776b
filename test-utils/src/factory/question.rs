//! Question factory for creating test question entities.

use crate::factory::helpers::{next_id, timestamp};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test questions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::question::QuestionFactory;
///
/// let question = QuestionFactory::new(&db)
///     .name("Two Sum")
///     .pattern("Hash Map")
///     .difficulty("Easy")
///     .build()
///     .await?;
/// ```
pub struct QuestionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    pattern: String,
    difficulty: String,
    last_completed_time: DateTime<Utc>,
    next_due_time: DateTime<Utc>,
    notes: String,
}

impl<'a> QuestionFactory<'a> {
    /// Creates a new QuestionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Question {n}"` where n is auto-incremented
    /// - pattern: `"Two Pointers"`
    /// - difficulty: `"Medium"`
    /// - last_completed_time: 2024-01-01T00:00:00Z
    /// - next_due_time: 2024-01-08T00:00:00Z
    /// - notes: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `QuestionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Question {}", next_id()),
            pattern: "Two Pointers".to_string(),
            difficulty: "Medium".to_string(),
            last_completed_time: timestamp(1_704_067_200),
            next_due_time: timestamp(1_704_672_000),
            notes: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Sets the stored difficulty string; any value is accepted.
    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn last_completed_time(mut self, time: DateTime<Utc>) -> Self {
        self.last_completed_time = time;
        self
    }

    pub fn next_due_time(mut self, time: DateTime<Utc>) -> Self {
        self.next_due_time = time;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Builds and inserts the question entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::question::Model)` - Created question entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::question::Model, DbErr> {
        entity::question::ActiveModel {
            name: ActiveValue::Set(self.name),
            pattern: ActiveValue::Set(self.pattern),
            difficulty: ActiveValue::Set(self.difficulty),
            last_completed_time: ActiveValue::Set(self.last_completed_time),
            next_due_time: ActiveValue::Set(self.next_due_time),
            notes: ActiveValue::Set(self.notes),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a question with default values.
///
/// Shorthand for `QuestionFactory::new(db).build().await`.
pub async fn create_question(db: &DatabaseConnection) -> Result<entity::question::Model, DbErr> {
    QuestionFactory::new(db).build().await
}
