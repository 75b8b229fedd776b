use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    /// Store-assigned identifier. Ignored when creating a user.
    #[serde(default)]
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Alice")]
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
}
