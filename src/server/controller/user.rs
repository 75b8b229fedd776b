use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{UserDto, UserListDto},
    },
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParam, User},
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Get all users.
///
/// # Returns
/// - `200 OK` - `{"users": [...]}`, an empty array when no users exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "User list response", body = UserListDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserRepository::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(User::into_list_dto(users))))
}

/// Create a new user.
///
/// Any `id` in the request body is ignored; the store assigns one.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - User to create
///
/// # Returns
/// - `201 Created` - The created user including its assigned id
/// - `400 Bad Request` - Body is not valid JSON or does not match the user shape
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = UserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Bad request", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserRepository::new(&state.db)
        .create(CreateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
