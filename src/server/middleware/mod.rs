//! Cross-cutting request processing applied to every route.
//!
//! - **Access log** (`trace`) - one span per request with method and path, and one
//!   event per response with status and latency
//! - **Recovery** (`recovery`) - panics inside handlers become 500 responses instead
//!   of tearing down the connection task

pub mod recovery;
pub mod trace;

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Wraps every route of `router` in the recovery and access log layers.
///
/// The access log is the outer layer so that responses produced by the recovery
/// layer are logged with their 500 status. Server errors are logged once, where the
/// error response is built, so the access log has no failure event of its own.
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(recovery::handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::AccessLogSpan)
                .on_response(trace::AccessLogResponse)
                .on_failure(()),
        )
}
