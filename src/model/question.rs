use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Difficulty label of a practice question.
///
/// Travels as a bare string. The three known labels map to their variants; any
/// other string is kept in `Other` and written back unchanged, so decoding never
/// rejects a difficulty.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Easy" => Self::Easy,
            "Medium" => Self::Medium,
            "Hard" => Self::Hard,
            _ => Self::Other(value),
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire form of a question.
///
/// Decoding only coerces types: absent or `null` fields fall back to an empty string,
/// and absent or `null` timestamps to `0001-01-01T00:00:00Z`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    /// Store-assigned identifier. Ignored when creating a question.
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "1")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "Two Sum")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "Hash Map")]
    pub pattern: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(value_type = String, example = "Easy")]
    pub difficulty: Difficulty,
    #[serde(default = "zero_time", deserialize_with = "null_as_zero_time")]
    pub last_completed_time: DateTime<Utc>,
    #[serde(default = "zero_time", deserialize_with = "null_as_zero_time")]
    pub next_due_time: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

/// Timestamp used when a question is created without one: midnight UTC on 1 January of year 1.
pub fn zero_time() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(zero_time))
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuestionListDto {
    pub questions: Vec<QuestionDto>,
}
