//! Wire-level DTOs shared by the HTTP handlers and the OpenAPI document.

pub mod api;
pub mod question;
pub mod user;
