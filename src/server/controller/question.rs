use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        question::{QuestionDto, QuestionListDto},
    },
    server::{
        data::question::QuestionRepository,
        error::AppError,
        model::question::{CreateQuestionParam, Question},
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping question endpoints in OpenAPI documentation
pub static QUESTION_TAG: &str = "questions";

/// Get all questions.
///
/// # Returns
/// - `200 OK` - `{"questions": [...]}`, an empty array when no questions exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/questions",
    tag = QUESTION_TAG,
    responses(
        (status = 200, description = "Questions list response", body = QuestionListDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn get_questions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let questions = QuestionRepository::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(Question::into_list_dto(questions))))
}

/// Create a new question.
///
/// Both timestamps are stored exactly as sent and the difficulty is not checked
/// against the known labels. Any `id` in the request body is ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Question to create
///
/// # Returns
/// - `201 Created` - The created question including its assigned id
/// - `400 Bad Request` - Body is not valid JSON or does not match the question shape
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/questions",
    tag = QUESTION_TAG,
    request_body = QuestionDto,
    responses(
        (status = 201, description = "Question created", body = QuestionDto),
        (status = 400, description = "Bad request", body = ErrorDto),
        (status = 500, description = "Database error", body = ErrorDto)
    ),
)]
pub async fn create_question(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<QuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let question = QuestionRepository::new(&state.db)
        .create(CreateQuestionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(question.into_dto())))
}
