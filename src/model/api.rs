use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by every failed request.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
