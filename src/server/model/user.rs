//! User domain models and parameters.

use crate::model::user::{UserDto, UserListDto};

/// A registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store-assigned identifier.
    pub id: i32,
    /// Free-text display name.
    pub name: String,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The numeric id is rendered as a string so clients treat it as opaque.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id.to_string(),
            name: self.name,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Wraps a list of users in the `{"users": [...]}` response shape.
    pub fn into_list_dto(users: Vec<Self>) -> UserListDto {
        UserListDto {
            users: users.into_iter().map(Self::into_dto).collect(),
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Display name of the user.
    pub name: String,
}

impl CreateUserParam {
    /// Builds creation parameters from a request DTO, discarding any client-sent id.
    pub fn from_dto(dto: UserDto) -> Self {
        Self { name: dto.name }
    }
}
