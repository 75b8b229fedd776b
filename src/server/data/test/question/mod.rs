use crate::{
    model::question::Difficulty,
    server::{data::question::QuestionRepository, model::question::CreateQuestionParam},
};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn two_sum(difficulty: Difficulty) -> CreateQuestionParam {
    CreateQuestionParam {
        name: "Two Sum".to_string(),
        pattern: "Hash Map".to_string(),
        difficulty,
        last_completed_time: at(1_704_067_200),
        next_due_time: at(1_704_672_000),
        notes: "use a map of complements".to_string(),
    }
}
