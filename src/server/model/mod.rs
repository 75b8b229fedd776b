//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, keeping the database schema and the
//! wire format independent of each other.

pub mod question;
pub mod user;
