use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::server::error::InternalServerError;

/// Turns a caught handler panic into a 500 response with the generic error body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.as_str()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg
    } else {
        "unknown panic payload"
    };

    InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}
