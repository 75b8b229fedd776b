//! SeaORM entity models for the study tracker tables.

pub mod prelude;

pub mod question;
pub mod user;
