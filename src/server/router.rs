//! Route configuration and API documentation.
//!
//! Handlers are registered through `utoipa-axum`'s `OpenApiRouter` so that the served
//! routes and the generated OpenAPI document cannot drift apart. The document is served
//! as JSON next to a Swagger UI; neither is consumed by the API itself.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{question, user},
    middleware,
    state::AppState,
};

/// Versioned prefix of every API route
pub const API_PREFIX: &str = "/api/v1";
/// Path of the Swagger UI
pub const SWAGGER_UI_PATH: &str = "/swagger";
/// Path of the generated OpenAPI JSON document
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LeetCode Questions API",
        version = "1.0",
        description = "API for managing LeetCode questions and users"
    ),
    tags(
        (name = "users", description = "User records"),
        (name = "questions", description = "Spaced-repetition practice questions")
    )
)]
pub struct ApiDoc;

/// Builds the API routes together with their OpenAPI description.
pub fn api_router() -> OpenApiRouter<AppState> {
    let v1 = OpenApiRouter::new()
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(question::get_questions, question::create_question));

    OpenApiRouter::with_openapi(ApiDoc::openapi()).nest(API_PREFIX, v1)
}

/// Builds the complete application router: API routes, documentation, and middleware.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    let router = router.merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, api));

    middleware::apply(router)
}
