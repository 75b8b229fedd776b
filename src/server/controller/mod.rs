//! HTTP request handlers.
//!
//! Each handler decodes one request, performs exactly one repository call, and encodes
//! one response. Handlers are annotated with `utoipa::path` so the router can assemble
//! the OpenAPI document from them.

pub mod question;
pub mod user;

#[cfg(test)]
mod test;
