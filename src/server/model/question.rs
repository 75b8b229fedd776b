//! Question domain models and parameters.
//!
//! A question is a spaced-repetition practice record. Both timestamps are supplied by
//! the client and stored as given; nothing here computes when a question is next due.

use chrono::{DateTime, Utc};

use crate::model::question::{Difficulty, QuestionDto, QuestionListDto};

/// A stored practice question.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Store-assigned identifier.
    pub id: i32,
    /// Problem name.
    pub name: String,
    /// Algorithmic pattern label, e.g. "Sliding Window".
    pub pattern: String,
    /// Difficulty label, possibly outside the known set.
    pub difficulty: Difficulty,
    /// When the question was last completed.
    pub last_completed_time: DateTime<Utc>,
    /// When the question is next due.
    pub next_due_time: DateTime<Utc>,
    /// Free-text notes.
    pub notes: String,
}

impl Question {
    /// Converts the question domain model to a DTO for API responses.
    pub fn into_dto(self) -> QuestionDto {
        QuestionDto {
            id: self.id.to_string(),
            name: self.name,
            pattern: self.pattern,
            difficulty: self.difficulty,
            last_completed_time: self.last_completed_time,
            next_due_time: self.next_due_time,
            notes: self.notes,
        }
    }

    /// Converts an entity model to a question domain model at the repository boundary.
    pub fn from_entity(entity: entity::question::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            pattern: entity.pattern,
            difficulty: Difficulty::from(entity.difficulty),
            last_completed_time: entity.last_completed_time,
            next_due_time: entity.next_due_time,
            notes: entity.notes,
        }
    }

    /// Wraps a list of questions in the `{"questions": [...]}` response shape.
    pub fn into_list_dto(questions: Vec<Self>) -> QuestionListDto {
        QuestionListDto {
            questions: questions.into_iter().map(Self::into_dto).collect(),
        }
    }
}

/// Parameters for creating a question; every field except the id.
#[derive(Debug, Clone)]
pub struct CreateQuestionParam {
    pub name: String,
    pub pattern: String,
    pub difficulty: Difficulty,
    pub last_completed_time: DateTime<Utc>,
    pub next_due_time: DateTime<Utc>,
    pub notes: String,
}

impl CreateQuestionParam {
    /// Builds creation parameters from a request DTO, discarding any client-sent id.
    pub fn from_dto(dto: QuestionDto) -> Self {
        Self {
            name: dto.name,
            pattern: dto.pattern,
            difficulty: dto.difficulty,
            last_completed_time: dto.last_completed_time,
            next_due_time: dto.next_due_time,
            notes: dto.notes,
        }
    }
}
